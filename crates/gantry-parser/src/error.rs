//! Decoder error types

use thiserror::Error;

/// Decoder error
///
/// Raised when a document node's shape does not match the structure the
/// target entity expects. Messages carry the field and the node kinds
/// involved; positional context (line/column) is the caller's job.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed YAML text
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Node shape does not match the field's expected kind
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Structurally valid node with an unusable value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;
