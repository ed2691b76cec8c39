//! # Field List
//!
//! Listbox showing one entry per registered field. Entries are rendered
//! straight from the registry, so the list and the registry cannot drift.

use console_core::FieldId;
use dioxus::prelude::*;

/// Properties for FieldList component
#[derive(Props, Clone, PartialEq)]
pub struct FieldListProps {
    /// `(id, label)` pairs in display order
    pub entries: Vec<(FieldId, String)>,

    /// Currently selected entry
    #[props(default)]
    pub selected: Option<FieldId>,

    /// Selection handler
    #[props(default)]
    pub on_select: EventHandler<Option<FieldId>>,
}

/// Listbox of defined fields
#[component]
pub fn FieldList(props: FieldListProps) -> Element {
    rsx! {
        div {
            class: "field-list",

            label {
                class: "block text-sm font-medium text-slate-300 mb-1.5",
                r#for: "fields",
                "Fields"
            }

            select {
                id: "fields",
                class: "w-full h-40 px-2 py-1 bg-slate-800 border border-slate-700 rounded-lg text-sm text-slate-100",
                size: "8",
                onchange: move |e| props.on_select.call(parse_selection(&e.value())),

                for (id, label) in &props.entries {
                    option {
                        key: "{id}",
                        value: "{id}",
                        selected: props.selected == Some(*id),
                        "{label}"
                    }
                }
            }

            if props.entries.is_empty() {
                p {
                    class: "mt-1 text-xs text-slate-500",
                    "No fields defined yet."
                }
            }
        }
    }
}

/// Selection carried by a listbox change event
fn parse_selection(value: &str) -> Option<FieldId> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("3"), Some(FieldId::new(3)));
        assert_eq!(parse_selection(""), None);
    }
}
