//! Form Controller
//!
//! Wires the form actions to the state and the backend:
//!
//! - add / remove / list fields
//! - submit one of the three requests
//!
//! A submission moves its button through `Idle -> Submitting -> Idle`.
//! Validation happens before anything is disabled; once the request is
//! issued, the [`InFlight`] guard puts the button and the progress indicator
//! back on every exit path, including the submission future being dropped.

use console_client::{Backend, ClientError};
use console_core::{ApiResponse, FieldDescriptor, FieldId, SubmitAction};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::Alert;
use crate::store::FormStore;

/// Alert text for any request that produced no usable response body
pub const TRANSPORT_FAILURE: &str = "Unspecified error in request.";

/// How a submit click ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected,
    /// The same action was already in flight; the click was ignored
    Busy,
    /// The backend answered; `code` may still report an error
    Completed(ApiResponse),
    /// The request failed before a response body was obtained
    Failed,
}

impl SubmitOutcome {
    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(response) if response.is_success())
    }
}

/// Entity form controller
#[derive(Debug, Clone)]
pub struct FormController<S, B> {
    store: S,
    backend: B,
}

impl<S: FormStore, B> FormController<S, B> {
    /// Create a controller over a store and a backend
    pub fn new(store: S, backend: B) -> Self {
        Self { store, backend }
    }

    /// The state handle
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backend handle
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========================================================================
    // Field list
    // ========================================================================

    /// Add the field currently described by the editor controls.
    ///
    /// Raises an alert and returns `None` when the name or datatype is empty.
    pub fn add_field(&self) -> Option<FieldId> {
        self.store.update(|state| match state.add_field_from_inputs() {
            Ok(id) => Some(id),
            Err(e) => {
                state.raise_alert(Alert::warning(e.user_message()));
                None
            }
        })
    }

    /// Fill the editor controls and add the field
    pub fn add_field_with(
        &self,
        name: impl Into<String>,
        datatype: impl Into<String>,
        indexed: bool,
        pk: bool,
    ) -> Option<FieldId> {
        let (name, datatype) = (name.into(), datatype.into());
        self.store.update(|state| {
            state.inputs.field_name = name;
            state.inputs.datatype = datatype;
            state.inputs.indexed = indexed;
            state.inputs.pk = pk;
        });
        self.add_field()
    }

    /// Remove the field selected in the list, if any
    pub fn remove_selected_field(&self) -> Option<FieldDescriptor> {
        self.store.update(|state| state.remove_selected_field())
    }

    /// Remove a field by identifier; unknown identifiers are ignored
    pub fn remove_field(&self, id: FieldId) -> Option<FieldDescriptor> {
        self.store.update(|state| {
            state.select_field(Some(id));
            state.remove_selected_field()
        })
    }

    /// Current fields in insertion order
    pub fn list_fields(&self) -> Vec<FieldDescriptor> {
        self.store.read(|state| state.registry.list_fields())
    }
}

impl<S: FormStore, B: Backend> FormController<S, B> {
    // ========================================================================
    // Submission
    // ========================================================================

    /// Handle a click on the submit button of `action`
    pub async fn submit(&self, action: SubmitAction) -> SubmitOutcome {
        let prepared = self.store.update(|state| {
            if state.is_busy(action) {
                return Err(SubmitOutcome::Busy);
            }
            match state.build_payload(action) {
                Ok(payload) => {
                    state.begin_submission(action);
                    Ok(payload)
                }
                Err(e) => {
                    state.raise_alert(Alert::warning(e.user_message()));
                    Err(SubmitOutcome::Rejected)
                }
            }
        });

        let payload = match prepared {
            Ok(payload) => payload,
            Err(outcome) => {
                tracing::debug!(action = action.as_str(), ?outcome, "submit not sent");
                return outcome;
            }
        };

        let _in_flight = InFlight {
            store: &self.store,
            action,
        };

        let id = Uuid::new_v4();
        let span = tracing::info_span!("submission", action = action.as_str(), %id);
        let result = async {
            tracing::info!(
                entity = payload.entity_name(),
                fields = payload.fields().len(),
                endpoint = action.endpoint(),
                "sending request"
            );
            self.backend.post_json(action.endpoint(), &payload).await
        }
        .instrument(span.clone())
        .await;

        let _entered = span.enter();
        self.store.update(|state| state.raise_alert(response_alert(action, &result)));
        log_result(&result);

        match result {
            Ok(response) => SubmitOutcome::Completed(response),
            Err(_) => SubmitOutcome::Failed,
        }
    }
}

/// Restores the button and the progress indicator when dropped
struct InFlight<'a, S: FormStore> {
    store: &'a S,
    action: SubmitAction,
}

impl<S: FormStore> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        let action = self.action;
        self.store.update(|state| state.finish_submission(action));
    }
}

/// Alert raised once the request settles
pub fn response_alert(action: SubmitAction, result: &Result<ApiResponse, ClientError>) -> Alert {
    match result {
        Ok(response) if response.is_success() => Alert::success(action.success_message(response)),
        Ok(response) => Alert::error(format!("Error in request: {}", response.message)),
        Err(_) => Alert::error(TRANSPORT_FAILURE),
    }
}

fn log_result(result: &Result<ApiResponse, ClientError>) {
    match result {
        Ok(response) if response.is_success() => {
            tracing::info!(code = response.code, "request succeeded");
        }
        Ok(response) => {
            tracing::warn!(code = response.code, message = %response.message, "backend reported an error");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "request failed"
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
