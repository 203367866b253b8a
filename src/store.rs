//! The in-memory record store queries run against.

use serde_json::Value;

use crate::error::{CreditsError, Result};
use crate::record::{ISSUES, SEQUENCES};

/// Source of the two decoded record collections.
///
/// Either collection may be absent or not array-shaped, in which case the
/// accessor returns `None` and queries over it produce no results.
pub trait Database {
    fn issues(&self) -> Option<&[Value]>;
    fn sequences(&self) -> Option<&[Value]>;
}

/// Database holding two decoded JSON documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDatabase {
    issues: Value,
    sequences: Value,
}

impl JsonDatabase {
    /// Wrap two decoded documents as-is, without checking their shape.
    pub fn from_values(issues: Value, sequences: Value) -> Self {
        Self { issues, sequences }
    }

    /// Parse two JSON texts, each of which must be an array.
    pub fn from_json_str(issues: &str, sequences: &str) -> Result<Self> {
        let issues = require_array(ISSUES, serde_json::from_str(issues)?)?;
        let sequences = require_array(SEQUENCES, serde_json::from_str(sequences)?)?;
        Ok(Self::from_values(issues, sequences))
    }

    pub fn issue_count(&self) -> usize {
        self.issues().map_or(0, <[Value]>::len)
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences().map_or(0, <[Value]>::len)
    }
}

impl Database for JsonDatabase {
    fn issues(&self) -> Option<&[Value]> {
        self.issues.as_array().map(Vec::as_slice)
    }

    fn sequences(&self) -> Option<&[Value]> {
        self.sequences.as_array().map(Vec::as_slice)
    }
}

pub(crate) fn require_array(collection: &'static str, document: Value) -> Result<Value> {
    if document.is_array() {
        Ok(document)
    } else {
        Err(CreditsError::MalformedRecord {
            collection,
            index: 0,
            reason: "JSON document should be an array of objects".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_str() {
        let db = JsonDatabase::from_json_str(r#"[{"id": "1"}]"#, "[]").unwrap();
        assert_eq!(db.issue_count(), 1);
        assert_eq!(db.sequence_count(), 0);
    }

    #[test]
    fn test_from_json_str_rejects_non_array() {
        let err = JsonDatabase::from_json_str("{}", "[]").unwrap_err();
        assert!(matches!(
            err,
            CreditsError::MalformedRecord { collection: "issues", .. }
        ));
    }

    #[test]
    fn test_from_json_str_rejects_bad_json() {
        let err = JsonDatabase::from_json_str("[", "[]").unwrap_err();
        assert!(matches!(err, CreditsError::Json(_)));
    }

    #[test]
    fn test_non_array_values_read_as_absent() {
        let db = JsonDatabase::from_values(Value::Null, json!({"a": 1}));
        assert!(db.issues().is_none());
        assert!(db.sequences().is_none());
        assert_eq!(db.issue_count(), 0);
    }
}
