//! Core types used throughout Entity Console
//!
//! This module contains the field descriptor, the request payloads sent to
//! the backend and the response envelope the backend answers with.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Field Identifiers
// ============================================================================

/// Identifier of a field in the in-memory registry.
///
/// Identifiers start at 1 and only ever grow within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    /// The first identifier handed out by a fresh registry
    pub const FIRST: FieldId = FieldId(1);

    /// Wrap a raw identifier
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FieldId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(FieldId)
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Datatypes offered by the field editor.
///
/// The backend accepts any non-empty identifier; these are the presets shown
/// in the datatype dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Long,
    Int,
    Float,
    Double,
    String,
    Text,
    Boolean,
    /// Feature vector column
    Feature,
}

impl DataType {
    /// All presets in display order
    pub fn all() -> &'static [DataType] {
        &[
            DataType::Long,
            DataType::Int,
            DataType::Float,
            DataType::Double,
            DataType::String,
            DataType::Text,
            DataType::Boolean,
            DataType::Feature,
        ]
    }

    /// Identifier sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Long => "long",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::String => "string",
            DataType::Text => "text",
            DataType::Boolean => "boolean",
            DataType::Feature => "feature",
        }
    }

    /// Look up a preset by its identifier
    pub fn from_identifier(identifier: &str) -> Option<DataType> {
        Self::all()
            .iter()
            .copied()
            .find(|dt| dt.as_str() == identifier)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One attribute of the entity being defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Datatype identifier (e.g. `int`, `string`, `feature`)
    pub datatype: String,

    /// Whether the backend should index this field
    #[serde(default)]
    pub indexed: bool,

    /// Whether this field is the primary key
    #[serde(default)]
    pub pk: bool,
}

impl FieldDescriptor {
    /// Create a plain field
    pub fn new(name: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datatype: datatype.into(),
            indexed: false,
            pk: false,
        }
    }

    /// Mark the field as indexed
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Mark the field as primary key
    pub fn pk(mut self) -> Self {
        self.pk = true;
        self
    }

    /// Text shown in the field list, e.g. `age (int, indexed)`
    pub fn label(&self) -> String {
        let mut text = format!("{} ({}", self.name, self.datatype);
        if self.indexed {
            text.push_str(", indexed");
        }
        if self.pk {
            text.push_str(", pk");
        }
        text.push(')');
        text
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// Submit Actions
// ============================================================================

/// The three requests the console can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitAction {
    CreateEntity,
    InsertDemoData,
    CreateIndex,
}

impl SubmitAction {
    /// All actions, in button order
    pub fn all() -> [SubmitAction; 3] {
        [
            SubmitAction::CreateEntity,
            SubmitAction::InsertDemoData,
            SubmitAction::CreateIndex,
        ]
    }

    /// Backend path the request is posted to
    pub fn endpoint(&self) -> &'static str {
        match self {
            SubmitAction::CreateEntity => "/entity/add",
            SubmitAction::InsertDemoData => "/entity/insertdemo",
            SubmitAction::CreateIndex => "/entity/indexall",
        }
    }

    /// Button caption
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmitAction::CreateEntity => "Create Entity",
            SubmitAction::InsertDemoData => "Insert Demo Data",
            SubmitAction::CreateIndex => "Create Indexes",
        }
    }

    /// Short machine-friendly name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitAction::CreateEntity => "create_entity",
            SubmitAction::InsertDemoData => "insert_demo_data",
            SubmitAction::CreateIndex => "create_index",
        }
    }

    /// Alert text shown when the backend answers with code 200
    pub fn success_message(&self, response: &ApiResponse) -> String {
        match self {
            SubmitAction::CreateEntity => format!("{} created", response.message),
            SubmitAction::InsertDemoData => "data inserted".to_string(),
            SubmitAction::CreateIndex => "indexes created".to_string(),
        }
    }
}

impl fmt::Display for SubmitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Body of `POST /entity/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEntityRequest {
    pub entityname: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Body of `POST /entity/insertdemo`
///
/// `ntuples` and `ndims` carry the raw input text; the backend parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertDemoRequest {
    pub entityname: String,
    pub ntuples: String,
    pub ndims: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Body of `POST /entity/indexall`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexRequest {
    pub entityname: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Any of the request bodies, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionPayload {
    CreateEntity(CreateEntityRequest),
    InsertDemoData(InsertDemoRequest),
    CreateIndex(CreateIndexRequest),
}

impl SubmissionPayload {
    /// The action this payload belongs to
    pub fn action(&self) -> SubmitAction {
        match self {
            SubmissionPayload::CreateEntity(_) => SubmitAction::CreateEntity,
            SubmissionPayload::InsertDemoData(_) => SubmitAction::InsertDemoData,
            SubmissionPayload::CreateIndex(_) => SubmitAction::CreateIndex,
        }
    }

    /// Name of the entity the request targets
    pub fn entity_name(&self) -> &str {
        match self {
            SubmissionPayload::CreateEntity(r) => &r.entityname,
            SubmissionPayload::InsertDemoData(r) => &r.entityname,
            SubmissionPayload::CreateIndex(r) => &r.entityname,
        }
    }

    /// Fields carried by the request
    pub fn fields(&self) -> &[FieldDescriptor] {
        match self {
            SubmissionPayload::CreateEntity(r) => &r.fields,
            SubmissionPayload::InsertDemoData(r) => &r.fields,
            SubmissionPayload::CreateIndex(r) => &r.fields,
        }
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Status code the backend uses to report success
pub const SUCCESS_CODE: i64 = 200;

/// Body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    /// Missing and `null` both read as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiResponse {
    /// Create a response
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

// ============================================================================
// Tests
// ============================================================================
