//! # Entity Form Page
//!
//! Define an entity's fields, then create the entity, insert demo data or
//! build its indexes.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Alert banner                                  │
//! │ Progress bar                                  │
//! ├──────────────────────┬───────────────────────┤
//! │ Entity name          │ Field list            │
//! │ Field name / type    │ [Remove Field]        │
//! │ [x] indexed [x] pk   │                       │
//! │ [Add Field]          │                       │
//! ├──────────────────────┴───────────────────────┤
//! │ ntuples  ndims                                │
//! │ [Create Entity] [Insert Demo Data] [Indexes]  │
//! └──────────────────────────────────────────────┘
//! ```

use console_client::HttpBackend;
use console_core::{DataType, SubmitAction};
use dioxus::prelude::*;

use crate::components::{
    ActionButton, AlertBanner, ButtonVariant, Checkbox, FieldList, ProgressBar, Select,
    SelectOption, TextInput,
};
use crate::state::{FORM_STATE, controller};

// ============================================================================
// Entity Form Page Component
// ============================================================================

/// Main entity form page
#[component]
pub fn EntityFormPage() -> Element {
    let backend = use_context::<HttpBackend>();

    let state = FORM_STATE.read();
    let inputs = state.inputs.clone();
    let entries = state.field_options();
    let alert = state.latest_alert().cloned();
    let progress = state.progress_visible();
    drop(state);

    let datatype_options: Vec<SelectOption> = DataType::all()
        .iter()
        .map(|dt| SelectOption::new(dt.as_str(), dt.as_str()))
        .collect();

    let add_backend = backend.clone();
    let handle_add_field = move |_| {
        if let Some(id) = controller(add_backend.clone()).add_field() {
            tracing::debug!(%id, "field added from form");
        }
    };

    let handle_remove_field = move |_| {
        controller(backend.clone()).remove_selected_field();
    };

    rsx! {
        div {
            class: "entity-form-page flex flex-col gap-4 p-6 max-w-4xl mx-auto",

            AlertBanner {
                alert: alert,
                on_dismiss: move |_| FORM_STATE.write().dismiss_alerts(),
            }

            ProgressBar { visible: progress }

            // Field definition
            div {
                class: "grid grid-cols-2 gap-6",

                div {
                    class: "flex flex-col gap-3",

                    TextInput {
                        id: "entityname",
                        label: "Entity name",
                        required: true,
                        value: inputs.entity_name.clone(),
                        on_change: move |v: String| FORM_STATE.write().inputs.entity_name = v,
                    }

                    TextInput {
                        id: "fieldname",
                        label: "Field name",
                        required: true,
                        value: inputs.field_name.clone(),
                        on_change: move |v: String| FORM_STATE.write().inputs.field_name = v,
                        on_enter: handle_add_field.clone(),
                    }

                    Select {
                        id: "datatype",
                        label: "Datatype",
                        placeholder: "Choose a datatype",
                        value: inputs.datatype.clone(),
                        options: datatype_options,
                        on_change: move |v: String| FORM_STATE.write().inputs.datatype = v,
                    }

                    div {
                        class: "flex gap-6",

                        Checkbox {
                            id: "indexed",
                            label: "indexed",
                            checked: inputs.indexed,
                            on_change: move |v: bool| FORM_STATE.write().inputs.indexed = v,
                        }

                        Checkbox {
                            id: "pk",
                            label: "pk",
                            checked: inputs.pk,
                            on_change: move |v: bool| FORM_STATE.write().inputs.pk = v,
                        }
                    }

                    ActionButton {
                        id: "btnAddField",
                        label: "Add Field",
                        variant: ButtonVariant::Secondary,
                        onclick: handle_add_field,
                    }
                }

                div {
                    class: "flex flex-col gap-3",

                    FieldList {
                        entries: entries,
                        selected: inputs.selected_field,
                        on_select: move |id| FORM_STATE.write().select_field(id),
                    }

                    ActionButton {
                        id: "btnRemoveField",
                        label: "Remove Field",
                        variant: ButtonVariant::Secondary,
                        onclick: handle_remove_field,
                    }
                }
            }

            // Demo data parameters
            div {
                class: "grid grid-cols-2 gap-6",

                TextInput {
                    id: "ntuples",
                    label: "Number of tuples",
                    input_type: "number",
                    value: inputs.ntuples.clone(),
                    on_change: move |v: String| FORM_STATE.write().inputs.ntuples = v,
                }

                TextInput {
                    id: "ndims",
                    label: "Number of dimensions",
                    input_type: "number",
                    value: inputs.ndims.clone(),
                    on_change: move |v: String| FORM_STATE.write().inputs.ndims = v,
                }
            }

            // Submissions
            div {
                class: "flex gap-3",
                for action in SubmitAction::all() {
                    SubmitButton { key: "{action}", action: action }
                }
            }
        }
    }
}

// ============================================================================
// Submit Button Component
// ============================================================================

/// Button bound to one submit action
#[component]
fn SubmitButton(action: SubmitAction) -> Element {
    let backend = use_context::<HttpBackend>();
    let disabled = FORM_STATE.read().is_busy(action);

    rsx! {
        ActionButton {
            id: button_id(action),
            label: action.display_name(),
            disabled: disabled,
            onclick: move |_| {
                let backend = backend.clone();
                spawn(async move {
                    let outcome = controller(backend).submit(action).await;
                    tracing::debug!(?outcome, "submission settled");
                });
            },
        }
    }
}

/// DOM id of the submit button for an action
fn button_id(action: SubmitAction) -> &'static str {
    match action {
        SubmitAction::CreateEntity => "btnSubmitCreateEntity",
        SubmitAction::InsertDemoData => "btnSubmitInsertData",
        SubmitAction::CreateIndex => "btnSubmitCreateIndex",
    }
}
