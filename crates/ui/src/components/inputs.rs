//! # Input Components
//!
//! Form controls used by the entity form:
//! - **TextInput**: single-line text input
//! - **Select**: dropdown selection
//! - **Checkbox**: boolean checkbox
//! - **ActionButton**: button with a disabled mark
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Element id, also used by the label
    pub id: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Input type (text, number, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(false);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    r#for: "{props.id}",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Element id
    pub id: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(false);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    r#for: "{props.id}",
                    "{label}"
                }
            }

            select {
                id: "{props.id}",
                class: "{select_class} cursor-pointer",
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Element id
    pub id: String,

    /// Label text
    pub label: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let checkbox_class = build_checkbox_class();

    rsx! {
        label {
            class: "checkbox-wrapper inline-flex items-center gap-2 cursor-pointer",

            input {
                id: "{props.id}",
                class: "{checkbox_class}",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| props.on_change.call(!props.checked),
            }

            span {
                class: "text-sm text-slate-200",
                "{props.label}"
            }
        }
    }
}

// ============================================================================
// Action Button Component
// ============================================================================

/// Visual weight of a button
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

/// Properties for ActionButton component
#[derive(Props, Clone, PartialEq)]
pub struct ActionButtonProps {
    /// Element id
    #[props(into)]
    pub id: String,

    /// Caption
    #[props(into)]
    pub label: String,

    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Visual weight
    #[props(default)]
    pub variant: ButtonVariant,

    /// Click handler
    #[props(default)]
    pub onclick: EventHandler<()>,
}

/// Button that carries both the `disabled` attribute and the `disabled` class
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let class = build_button_class(props.variant, props.disabled);

    rsx! {
        button {
            id: "{props.id}",
            class: "{class}",
            disabled: props.disabled,
            onclick: move |_| {
                if !props.disabled {
                    props.onclick.call(());
                }
            },
            "{props.label}"
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
        "placeholder-slate-500",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.push("border-rose-500");
        classes.push("focus:ring-rose-500/30");
    } else {
        classes.push("border-slate-700");
        classes.push("focus:ring-indigo-500/30");
    }

    classes.join(" ")
}

/// Build checkbox class string
fn build_checkbox_class() -> String {
    ["w-4", "h-4", "rounded", "accent-indigo-600", "cursor-pointer"].join(" ")
}

/// Build button class string
pub(crate) fn build_button_class(variant: ButtonVariant, disabled: bool) -> String {
    let mut classes = vec!["btn", "px-4", "py-2", "rounded-lg", "text-sm", "font-medium"];

    match variant {
        ButtonVariant::Primary => {
            classes.push("bg-indigo-600");
            classes.push("text-white");
        }
        ButtonVariant::Secondary => {
            classes.push("bg-slate-700");
            classes.push("text-slate-100");
        }
    }

    if disabled {
        classes.push("disabled");
        classes.push("opacity-50");
        classes.push("cursor-not-allowed");
    } else {
        classes.push("hover:brightness-110");
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================
