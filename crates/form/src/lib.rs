//! # Console Form
//!
//! The entity form, independent of any rendering toolkit.
//!
//! - **registry**: ordered field list with never-reused identifiers
//! - **state**: inputs, button states, progress indicator, alerts
//! - **store**: the handle the controller mutates state through
//! - **controller**: field actions and the three submissions
//!

pub mod controller;
pub mod registry;
pub mod state;
pub mod store;

pub use controller::{FormController, SubmitOutcome, TRANSPORT_FAILURE, response_alert};
pub use registry::FieldRegistry;
pub use state::{
    ALERT_HISTORY_LIMIT, Alert, AlertLevel, ButtonState, FormInputs, FormState, SubmitButtons,
};
pub use store::{FormStore, SharedForm, shared_form};
