//! Core traits for Entity Console

use crate::error::{ConsoleError, ConsoleResult};
use crate::types::{
    CreateEntityRequest, CreateIndexRequest, FieldDescriptor, InsertDemoRequest,
    SubmissionPayload,
};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait check their internal consistency and
/// return a `ConsoleError` describing the first problem found.
pub trait Validatable {
    /// Validate the current state of the object
    fn validate(&self) -> ConsoleResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Alert text when a field is added without a name
pub const MISSING_FIELD_NAME: &str = "Please specify a name for the field.";

/// Alert text when a field is added without a datatype
pub const MISSING_DATATYPE: &str = "Please specify a datatype for the field.";

/// Alert text when a request is submitted without an entity name
pub const MISSING_ENTITY: &str = "Please specify an entity.";

impl Validatable for FieldDescriptor {
    fn validate(&self) -> ConsoleResult<()> {
        if self.name.is_empty() {
            return Err(ConsoleError::missing_input(MISSING_FIELD_NAME));
        }
        if self.datatype.is_empty() {
            return Err(ConsoleError::missing_input(MISSING_DATATYPE));
        }
        Ok(())
    }
}

fn validate_entity_name(name: &str) -> ConsoleResult<()> {
    if name.is_empty() {
        return Err(ConsoleError::missing_input(MISSING_ENTITY));
    }
    Ok(())
}

impl Validatable for CreateEntityRequest {
    fn validate(&self) -> ConsoleResult<()> {
        validate_entity_name(&self.entityname)
    }
}

// ntuples/ndims are passed through untouched; the backend owns their parsing.
impl Validatable for InsertDemoRequest {
    fn validate(&self) -> ConsoleResult<()> {
        validate_entity_name(&self.entityname)
    }
}

impl Validatable for CreateIndexRequest {
    fn validate(&self) -> ConsoleResult<()> {
        validate_entity_name(&self.entityname)
    }
}

impl Validatable for SubmissionPayload {
    fn validate(&self) -> ConsoleResult<()> {
        match self {
            SubmissionPayload::CreateEntity(r) => r.validate(),
            SubmissionPayload::InsertDemoData(r) => r.validate(),
            SubmissionPayload::CreateIndex(r) => r.validate(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validation_order() {
        let err = FieldDescriptor::new("", "").validate().unwrap_err();
        assert_eq!(err.user_message(), MISSING_FIELD_NAME);

        let err = FieldDescriptor::new("age", "").validate().unwrap_err();
        assert_eq!(err.user_message(), MISSING_DATATYPE);

        assert!(FieldDescriptor::new("age", "int").is_valid());
    }

    #[test]
    fn test_entity_name_required() {
        let payload = SubmissionPayload::CreateIndex(CreateIndexRequest {
            entityname: String::new(),
            fields: Vec::new(),
        });
        let err = payload.validate().unwrap_err();
        assert_eq!(err.user_message(), MISSING_ENTITY);
    }

    #[test]
    fn test_demo_counts_not_validated() {
        let request = InsertDemoRequest {
            entityname: "features".to_string(),
            ntuples: "lots".to_string(),
            ndims: String::new(),
            fields: Vec::new(),
        };
        assert!(request.is_valid());
    }

    #[test]
    fn test_whitespace_entity_name_is_accepted() {
        let request = CreateEntityRequest {
            entityname: " ".to_string(),
            fields: Vec::new(),
        };
        assert!(request.is_valid());
    }
}
