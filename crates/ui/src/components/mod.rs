//! # UI Components
//!
//! Reusable Dioxus components for the entity form:
//! - **Inputs**: text, select, checkbox and button controls
//! - **Field List**: listbox of defined fields
//! - **Feedback**: alert banner and progress indicator
//!

pub mod feedback;
pub mod field_list;
pub mod inputs;

pub use feedback::{AlertBanner, ProgressBar};
pub use field_list::FieldList;
pub use inputs::{ActionButton, ButtonVariant, Checkbox, Select, SelectOption, TextInput};
