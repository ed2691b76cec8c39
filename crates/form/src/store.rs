//! Access to form state
//!
//! The controller never owns the [`FormState`] directly: the desktop UI keeps
//! it in a signal, the CLI and the tests in a mutex. [`FormStore`] is the
//! common handle.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::state::FormState;

/// Handle through which form state is read and mutated
pub trait FormStore {
    /// Run `f` with exclusive access to the state
    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R;

    /// Run `f` with shared access to the state
    fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        self.update(|state| f(state))
    }

    /// Clone of the current state
    fn snapshot(&self) -> FormState {
        self.read(FormState::clone)
    }
}

/// Thread-safe store used by the CLI and tests
pub type SharedForm = Arc<Mutex<FormState>>;

/// Create a shared store around an empty form
pub fn shared_form() -> SharedForm {
    Arc::new(Mutex::new(FormState::new()))
}

impl FormStore for Arc<Mutex<FormState>> {
    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        // a panic inside `f` leaves the state usable, so poisoning is ignored
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl FormStore for Rc<RefCell<FormState>> {
    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<S: FormStore + ?Sized> FormStore for &S {
    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        (**self).update(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::SubmitAction;

    #[test]
    fn test_shared_form_update() {
        let store = shared_form();
        store.update(|s| s.inputs.entity_name = "features".to_string());
        assert_eq!(store.read(|s| s.inputs.entity_name.clone()), "features");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = Rc::new(RefCell::new(FormState::new()));
        let before = store.snapshot();
        store.update(|s| s.begin_submission(SubmitAction::CreateIndex));

        assert!(!before.progress_visible());
        assert!(store.read(|s| s.progress_visible()));
    }
}
