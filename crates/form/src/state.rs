//! Form State
//!
//! Everything the entity form shows: the input values, the field registry,
//! the per-action button state, the shared progress indicator and the alert
//! history. All mutation goes through methods here so the UI and the CLI see
//! identical behavior.

use chrono::{DateTime, Utc};
use console_core::{
    ConsoleResult, CreateEntityRequest, CreateIndexRequest, FieldDescriptor, FieldId,
    InsertDemoRequest, SubmissionPayload, SubmitAction, Validatable,
};

use crate::registry::FieldRegistry;

// ============================================================================
// Inputs
// ============================================================================

/// Current values of the form controls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    /// Entity name text box
    pub entity_name: String,
    /// Field name text box
    pub field_name: String,
    /// Datatype dropdown
    pub datatype: String,
    /// "indexed" checkbox
    pub indexed: bool,
    /// "pk" checkbox
    pub pk: bool,
    /// Number of demo tuples, raw text
    pub ntuples: String,
    /// Number of feature dimensions, raw text
    pub ndims: String,
    /// Entry selected in the field list
    pub selected_field: Option<FieldId>,
}

impl FormInputs {
    /// Descriptor described by the field-editor controls
    pub fn field_descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.field_name.clone(),
            datatype: self.datatype.clone(),
            indexed: self.indexed,
            pk: self.pk,
        }
    }

    /// Reset the field editor after a successful add; the datatype stays
    fn clear_field_editor(&mut self) {
        self.field_name.clear();
        self.indexed = false;
        self.pk = false;
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// State of one submit button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    /// A request for this action is in flight; the button is disabled
    Submitting,
}

impl ButtonState {
    /// Whether the button should render disabled
    pub fn is_disabled(&self) -> bool {
        matches!(self, ButtonState::Submitting)
    }
}

/// One button per submit action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitButtons {
    pub create_entity: ButtonState,
    pub insert_demo_data: ButtonState,
    pub create_index: ButtonState,
}

impl SubmitButtons {
    /// State of the button for an action
    pub fn get(&self, action: SubmitAction) -> ButtonState {
        match action {
            SubmitAction::CreateEntity => self.create_entity,
            SubmitAction::InsertDemoData => self.insert_demo_data,
            SubmitAction::CreateIndex => self.create_index,
        }
    }

    fn set(&mut self, action: SubmitAction, state: ButtonState) {
        match action {
            SubmitAction::CreateEntity => self.create_entity = state,
            SubmitAction::InsertDemoData => self.insert_demo_data = state,
            SubmitAction::CreateIndex => self.create_index = state,
        }
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// Alert severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Message shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub text: String,
    pub level: AlertLevel,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    /// Create an alert stamped with the current time
    pub fn new(text: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            text: text.into(),
            level,
            raised_at: Utc::now(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, AlertLevel::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, AlertLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, AlertLevel::Error)
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Number of alerts kept; older ones are dropped first
pub const ALERT_HISTORY_LIMIT: usize = 32;

/// Complete state of the entity form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub inputs: FormInputs,
    pub registry: FieldRegistry,
    pub buttons: SubmitButtons,
    alerts: Vec<Alert>,
    in_flight: usize,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Field list
    // ========================================================================

    /// Add the field described by the editor controls.
    ///
    /// On success the name and checkboxes are cleared. On failure nothing
    /// changes and no identifier is consumed.
    pub fn add_field_from_inputs(&mut self) -> ConsoleResult<FieldId> {
        let field = self.inputs.field_descriptor();
        field.validate()?;

        let label = field.label();
        let id = self.registry.insert(field);
        self.inputs.clear_field_editor();
        tracing::debug!(%id, %label, "field added");
        Ok(id)
    }

    /// Remove the field selected in the list; does nothing without a selection
    pub fn remove_selected_field(&mut self) -> Option<FieldDescriptor> {
        let id = self.inputs.selected_field.take()?;
        let removed = self.registry.remove(id);
        if removed.is_some() {
            tracing::debug!(%id, "field removed");
        }
        removed
    }

    /// Change the list selection
    pub fn select_field(&mut self, id: Option<FieldId>) {
        self.inputs.selected_field = id;
    }

    /// `(id, label)` pairs for the field list widget
    pub fn field_options(&self) -> Vec<(FieldId, String)> {
        self.registry
            .entries()
            .map(|(id, field)| (id, field.label()))
            .collect()
    }

    // ========================================================================
    // Submissions
    // ========================================================================

    /// Request body for an action, built from the current inputs and fields
    pub fn build_payload(&self, action: SubmitAction) -> ConsoleResult<SubmissionPayload> {
        let entityname = self.inputs.entity_name.clone();
        let fields = self.registry.list_fields();

        let payload = match action {
            SubmitAction::CreateEntity => {
                SubmissionPayload::CreateEntity(CreateEntityRequest { entityname, fields })
            }
            SubmitAction::InsertDemoData => SubmissionPayload::InsertDemoData(InsertDemoRequest {
                entityname,
                ntuples: self.inputs.ntuples.clone(),
                ndims: self.inputs.ndims.clone(),
                fields,
            }),
            SubmitAction::CreateIndex => {
                SubmissionPayload::CreateIndex(CreateIndexRequest { entityname, fields })
            }
        };

        payload.validate()?;
        Ok(payload)
    }

    /// Whether a request for this action is in flight
    pub fn is_busy(&self, action: SubmitAction) -> bool {
        self.buttons.get(action).is_disabled()
    }

    /// Disable the action's button and show progress
    pub fn begin_submission(&mut self, action: SubmitAction) {
        self.buttons.set(action, ButtonState::Submitting);
        self.in_flight += 1;
    }

    /// Re-enable the action's button; progress hides once nothing is in flight
    pub fn finish_submission(&mut self, action: SubmitAction) {
        if self.buttons.get(action).is_disabled() {
            self.buttons.set(action, ButtonState::Idle);
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }

    /// Whether the progress indicator is visible
    pub fn progress_visible(&self) -> bool {
        self.in_flight > 0
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Show an alert
    pub fn raise_alert(&mut self, alert: Alert) {
        if self.alerts.len() >= ALERT_HISTORY_LIMIT {
            let excess = self.alerts.len() + 1 - ALERT_HISTORY_LIMIT;
            self.alerts.drain(..excess);
        }
        self.alerts.push(alert);
    }

    /// Most recent alert
    pub fn latest_alert(&self) -> Option<&Alert> {
        self.alerts.last()
    }

    /// Retained alerts, oldest first
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Forget all alerts
    pub fn dismiss_alerts(&mut self) {
        self.alerts.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::{MISSING_DATATYPE, MISSING_ENTITY, MISSING_FIELD_NAME};
    use pretty_assertions::assert_eq;

    fn fill_field(state: &mut FormState, name: &str, datatype: &str, indexed: bool, pk: bool) {
        state.inputs.field_name = name.to_string();
        state.inputs.datatype = datatype.to_string();
        state.inputs.indexed = indexed;
        state.inputs.pk = pk;
    }

    #[test]
    fn test_add_field_clears_editor_but_keeps_datatype() {
        let mut state = FormState::new();
        fill_field(&mut state, "age", "int", true, false);

        let id = state.add_field_from_inputs().unwrap();
        assert_eq!(id, FieldId::new(1));
        assert_eq!(
            state.field_options(),
            vec![(FieldId::new(1), "age (int, indexed)".to_string())]
        );
        assert_eq!(state.inputs.field_name, "");
        assert!(!state.inputs.indexed);
        assert!(!state.inputs.pk);
        assert_eq!(state.inputs.datatype, "int");
    }

    #[test]
    fn test_add_field_requires_name_and_datatype() {
        let mut state = FormState::new();
        fill_field(&mut state, "", "int", false, false);
        let err = state.add_field_from_inputs().unwrap_err();
        assert_eq!(err.user_message(), MISSING_FIELD_NAME);

        fill_field(&mut state, "age", "", true, false);
        let err = state.add_field_from_inputs().unwrap_err();
        assert_eq!(err.user_message(), MISSING_DATATYPE);

        assert!(state.registry.is_empty());
        assert_eq!(state.registry.next_id(), FieldId::new(1));
        // a failed add leaves the editor untouched
        assert_eq!(state.inputs.field_name, "age");
        assert!(state.inputs.indexed);
    }

    #[test]
    fn test_remove_selected_field() {
        let mut state = FormState::new();
        fill_field(&mut state, "a", "int", false, false);
        let a = state.add_field_from_inputs().unwrap();
        fill_field(&mut state, "b", "int", false, false);
        state.add_field_from_inputs().unwrap();

        state.select_field(Some(a));
        let removed = state.remove_selected_field().unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(state.inputs.selected_field, None);
        assert_eq!(state.registry.len(), 1);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut state = FormState::new();
        fill_field(&mut state, "a", "int", false, false);
        state.add_field_from_inputs().unwrap();

        assert_eq!(state.remove_selected_field(), None);
        state.select_field(Some(FieldId::new(99)));
        assert_eq!(state.remove_selected_field(), None);
        assert_eq!(state.registry.len(), 1);
    }

    #[test]
    fn test_build_payload_requires_entity_name() {
        let state = FormState::new();
        for action in SubmitAction::all() {
            let err = state.build_payload(action).unwrap_err();
            assert_eq!(err.user_message(), MISSING_ENTITY);
        }
    }

    #[test]
    fn test_build_insert_demo_payload() {
        let mut state = FormState::new();
        state.inputs.entity_name = "features".to_string();
        state.inputs.ntuples = "1000".to_string();
        state.inputs.ndims = "".to_string();
        fill_field(&mut state, "vec", "feature", false, false);
        state.add_field_from_inputs().unwrap();

        let payload = state.build_payload(SubmitAction::InsertDemoData).unwrap();
        match payload {
            SubmissionPayload::InsertDemoData(request) => {
                assert_eq!(request.entityname, "features");
                assert_eq!(request.ntuples, "1000");
                assert_eq!(request.ndims, "");
                assert_eq!(request.fields, vec![FieldDescriptor::new("vec", "feature")]);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_progress_counts_in_flight_submissions() {
        let mut state = FormState::new();
        assert!(!state.progress_visible());

        state.begin_submission(SubmitAction::CreateEntity);
        state.begin_submission(SubmitAction::CreateIndex);
        assert!(state.is_busy(SubmitAction::CreateEntity));
        assert!(!state.is_busy(SubmitAction::InsertDemoData));

        state.finish_submission(SubmitAction::CreateEntity);
        assert!(state.progress_visible());
        assert!(!state.is_busy(SubmitAction::CreateEntity));

        state.finish_submission(SubmitAction::CreateIndex);
        assert!(!state.progress_visible());

        // finishing twice must not underflow or hide someone else's progress
        state.begin_submission(SubmitAction::InsertDemoData);
        state.finish_submission(SubmitAction::CreateIndex);
        assert!(state.progress_visible());
    }

    #[test]
    fn test_alerts() {
        let mut state = FormState::new();
        assert!(state.latest_alert().is_none());

        state.raise_alert(Alert::warning("first"));
        state.raise_alert(Alert::success("second"));
        assert_eq!(state.alerts().len(), 2);
        assert_eq!(state.latest_alert().unwrap().text, "second");
        assert_eq!(state.latest_alert().unwrap().level, AlertLevel::Success);

        state.dismiss_alerts();
        assert!(state.alerts().is_empty());
    }

    #[test]
    fn test_alert_history_is_bounded() {
        let mut state = FormState::new();
        for n in 0..ALERT_HISTORY_LIMIT + 10 {
            state.raise_alert(Alert::warning(format!("alert {n}")));
        }

        assert_eq!(state.alerts().len(), ALERT_HISTORY_LIMIT);
        assert_eq!(state.alerts()[0].text, "alert 10");
        assert_eq!(
            state.latest_alert().unwrap().text,
            format!("alert {}", ALERT_HISTORY_LIMIT + 9)
        );
    }
}
