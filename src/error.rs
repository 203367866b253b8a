//! Error taxonomy for credit queries.
//!
//! "No matches" is never an error: an empty result is the normal outcome of
//! a query that finds nothing. Every variant here means the query must be
//! abandoned.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the record collections or answering a query.
#[derive(Debug, Error)]
pub enum CreditsError {
    #[error("{collection} record {index} is malformed: {reason}")]
    MalformedRecord {
        collection: &'static str,
        index: usize,
        reason: String,
    },
    #[error("couldn't find issue with id {0}")]
    UnresolvedForeignKey(String),
    #[error("expected {expected} value for field '{field}', got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field {0} too long")]
    FieldNameTooLong(String),
    #[error("source '{}' is unavailable: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CreditsError>;

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        serde_json::Value::Number(_) => "double",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
