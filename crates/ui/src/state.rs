//! Application State Management for Entity Console
//!
//! The form lives in a single Dioxus global signal. [`GlobalFormStore`] lets
//! the toolkit-independent controller read and write it.

use console_client::HttpBackend;
use console_form::{FormController, FormState, FormStore};
use dioxus::prelude::*;

/// Global form state signal
pub static FORM_STATE: GlobalSignal<FormState> = Signal::global(FormState::new);

/// Store backed by [`FORM_STATE`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFormStore;

impl FormStore for GlobalFormStore {
    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut FORM_STATE.write())
    }

    fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        f(&FORM_STATE.read())
    }
}

/// Controller type used by the desktop app
pub type UiController = FormController<GlobalFormStore, HttpBackend>;

/// Controller over the global form and the given backend
pub fn controller(backend: HttpBackend) -> UiController {
    FormController::new(GlobalFormStore, backend)
}

/// Hook to read a projection of the form state
pub fn use_form<R>(f: impl FnOnce(&FormState) -> R) -> R {
    f(&FORM_STATE.read())
}
