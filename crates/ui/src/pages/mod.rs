//! # Pages
//!
//! Top-level views of the console. There is a single page today: the entity
//! form.

pub mod entity_form;

pub use entity_form::EntityFormPage;
