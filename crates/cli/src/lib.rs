//! # Console CLI
//!
//! Command-line interface for Entity Console.
//!
//! Drives the same form controller as the desktop app, so fields and
//! submissions are validated identically.
//!
//! ## Commands
//!
//! - `create-entity` - Create an entity from a list of fields
//! - `insert-demo` - Insert generated demo data into an entity
//! - `create-index` - Build the indexes of an entity
//! - `fields` - Preview how field specifications are listed
//!

use colored::Colorize;
use console_core::{ConsoleError, ConsoleResult, FieldDescriptor, FieldId};
use console_form::{Alert, AlertLevel, FormController, FormStore};

pub use console_client;
pub use console_core;
pub use console_form;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Flag accepted after the datatype that marks a field as indexed
const INDEXED_FLAG: &str = "indexed";

/// Flag accepted after the datatype that marks a field as primary key
const PK_FLAG: &str = "pk";

// ============================================================================
// Field specifications
// ============================================================================

/// Parse `name:datatype[:indexed][:pk]` into a descriptor.
///
/// Only the shape is checked here. Empty names and datatypes are left to the
/// add-field validation so they produce the same alert as in the desktop app.
pub fn parse_field_spec(spec: &str) -> ConsoleResult<FieldDescriptor> {
    let mut parts = spec.split(':');
    let name = parts.next().unwrap_or_default();
    let datatype = parts
        .next()
        .ok_or_else(|| ConsoleError::invalid_field_spec(spec, "expected name:datatype"))?;

    let mut descriptor = FieldDescriptor::new(name, datatype);
    for flag in parts {
        match flag {
            INDEXED_FLAG if !descriptor.indexed => descriptor = descriptor.indexed(),
            PK_FLAG if !descriptor.pk => descriptor = descriptor.pk(),
            INDEXED_FLAG | PK_FLAG => {
                return Err(ConsoleError::invalid_field_spec(
                    spec,
                    format!("flag '{flag}' given twice"),
                ));
            }
            other => {
                return Err(ConsoleError::invalid_field_spec(
                    spec,
                    format!("unknown flag '{other}', expected 'indexed' or 'pk'"),
                ));
            }
        }
    }
    Ok(descriptor)
}

/// Add every field through the controller's field editor, in order.
///
/// Stops at the first field the editor rejects; its alert is then the
/// form's latest.
pub fn add_fields<S: FormStore, B>(
    controller: &FormController<S, B>,
    fields: &[FieldDescriptor],
) -> Option<Vec<FieldId>> {
    fields
        .iter()
        .map(|field| {
            controller.add_field_with(
                field.name.clone(),
                field.datatype.clone(),
                field.indexed,
                field.pk,
            )
        })
        .collect()
}

// ============================================================================
// Output
// ============================================================================

/// Alert text colored by level
pub fn render_alert(alert: &Alert) -> String {
    match alert.level {
        AlertLevel::Success => alert.text.green().to_string(),
        AlertLevel::Error => alert.text.red().bold().to_string(),
        AlertLevel::Warning => alert.text.yellow().to_string(),
        AlertLevel::Info => alert.text.clone(),
    }
}

/// Print an alert; successes go to stdout, everything else to stderr
pub fn print_alert(alert: &Alert) {
    match alert.level {
        AlertLevel::Success | AlertLevel::Info => println!("{}", render_alert(alert)),
        AlertLevel::Warning | AlertLevel::Error => eprintln!("{}", render_alert(alert)),
    }
}

/// Print the form's most recent alert, if any
pub fn print_latest_alert<S: FormStore, B>(controller: &FormController<S, B>) {
    if let Some(alert) = controller.store().read(|state| state.latest_alert().cloned()) {
        print_alert(&alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::MISSING_FIELD_NAME;
    use console_form::shared_form;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_parse_plain_field() {
        let field = parse_field_spec("age:int").unwrap();
        assert_eq!(field, FieldDescriptor::new("age", "int"));
    }

    #[test]
    fn test_parse_flags_in_any_order() {
        let field = parse_field_spec("id:long:pk:indexed").unwrap();
        assert!(field.indexed);
        assert!(field.pk);
        assert_eq!(field.label(), "id (long, indexed, pk)");
    }

    #[test]
    fn test_parse_missing_datatype() {
        let err = parse_field_spec("age").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidFieldSpec { .. }));
    }

    #[test]
    fn test_parse_unknown_flag() {
        let err = parse_field_spec("age:int:unique").unwrap_err();
        assert!(err.to_string().contains("unknown flag 'unique'"));
    }

    #[test]
    fn test_parse_repeated_flag() {
        assert!(parse_field_spec("age:int:pk:pk").is_err());
    }

    #[test]
    fn test_parse_leaves_empty_parts_to_validation() {
        let field = parse_field_spec(":int").unwrap();
        assert!(field.name.is_empty());
    }

    #[test]
    fn test_add_fields_in_order() {
        let controller = FormController::new(shared_form(), ());
        let fields = vec![
            parse_field_spec("id:long:pk").unwrap(),
            parse_field_spec("vec:feature:indexed").unwrap(),
        ];
        let ids = add_fields(&controller, &fields).unwrap();

        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);
        assert_eq!(controller.list_fields(), fields);
    }

    #[test]
    fn test_add_fields_stops_at_invalid() {
        let controller = FormController::new(shared_form(), ());
        let fields = vec![
            FieldDescriptor::new("id", "long"),
            FieldDescriptor::new("", "int"),
            FieldDescriptor::new("age", "int"),
        ];

        assert_eq!(add_fields(&controller, &fields), None);

        let state = controller.store().snapshot();
        assert_eq!(state.registry.len(), 1);
        let alert = state.latest_alert().unwrap();
        assert_eq!(alert.text, MISSING_FIELD_NAME);
        assert_eq!(alert.level, AlertLevel::Warning);
    }

    #[test]
    fn test_render_alert_keeps_text() {
        let alert = Alert::error("Error in request: boom");
        assert!(render_alert(&alert).contains("Error in request: boom"));
    }
}
