//! # Console Core
//!
//! Core types, traits, and error handling for Entity Console.
//!
//! This crate provides the foundational building blocks used throughout
//! the console, including:
//!
//! - **Types**: Field descriptors, request payloads, the response envelope
//! - **Traits**: `Validatable` for form-level checks
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConsoleError, ConsoleResult};
pub use traits::{MISSING_DATATYPE, MISSING_ENTITY, MISSING_FIELD_NAME, Validatable};
pub use types::{
    ApiResponse, CreateEntityRequest, CreateIndexRequest, DataType, FieldDescriptor, FieldId,
    InsertDemoRequest, SUCCESS_CODE, SubmissionPayload, SubmitAction,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
