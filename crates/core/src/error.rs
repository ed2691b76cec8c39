//! Error types for Entity Console
//!
//! This module provides the error type shared by the model, the controller
//! and the front ends. Transport errors live with the HTTP client.

use thiserror::Error;

/// The main error type for Entity Console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A required form input was left empty
    #[error("{0}")]
    MissingInput(String),

    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A field specification could not be parsed
    #[error("Invalid field specification '{spec}': {message}")]
    InvalidFieldSpec { spec: String, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Create a missing-input error; the message is shown to the user as is
    pub fn missing_input(msg: impl Into<String>) -> Self {
        ConsoleError::MissingInput(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a field specification error
    pub fn invalid_field_spec(spec: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::InvalidFieldSpec {
            spec: spec.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ConsoleError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::MissingInput(_)
                | ConsoleError::Validation(_)
                | ConsoleError::InvalidFieldSpec { .. }
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, ConsoleError::InvalidConfig(_))
    }

    /// Text suitable for an alert
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::MissingInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_shown_verbatim() {
        let err = ConsoleError::missing_input("Please specify an entity.");
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Please specify an entity.");
        assert_eq!(err.to_string(), "Please specify an entity.");
    }

    #[test]
    fn test_field_spec_error() {
        let err = ConsoleError::invalid_field_spec("age", "missing datatype");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid field specification 'age': missing datatype"
        );
    }

    #[test]
    fn test_config_error() {
        let err = ConsoleError::config("base_url must not be empty");
        assert!(err.is_config());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: base_url must not be empty"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConsoleError = json_err.into();
        assert!(matches!(err, ConsoleError::Json(_)));
    }
}
