//! Borrowed views over decoded issue and sequence records.
//!
//! Records are JSON objects owned by the [`Database`](crate::Database). The
//! views here are `Copy` handles that remember where the record came from,
//! so integrity errors can name the offending element.

use serde_json::{Map, Value};

use crate::error::{CreditsError, Result, json_type_name};
use crate::field::CreditField;

/// The decoded fields of one record.
pub type Fields = Map<String, Value>;

pub(crate) const ISSUES: &str = "issues";
pub(crate) const SEQUENCES: &str = "sequences";

/// Look up `key` and require a string when present.
fn optional_str<'a>(fields: &'a Fields, key: &str) -> Result<Option<&'a str>> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(CreditsError::TypeMismatch {
            field: key.to_string(),
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

fn object_at<'a>(collection: &'static str, value: &'a Value, index: usize) -> Result<&'a Fields> {
    value.as_object().ok_or_else(|| CreditsError::MalformedRecord {
        collection,
        index,
        reason: format!("expected an object, got {}", json_type_name(value)),
    })
}

/// A published issue: the parent record sequences point at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueRecord<'a> {
    index: usize,
    fields: &'a Fields,
}

impl<'a> IssueRecord<'a> {
    pub fn new(index: usize, fields: &'a Fields) -> Self {
        Self { index, fields }
    }

    /// View element `index` of the issues collection.
    pub fn from_value(index: usize, value: &'a Value) -> Result<Self> {
        object_at(ISSUES, value, index).map(|fields| Self::new(index, fields))
    }

    /// Position of this record in the issues collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &'a Fields {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// The issue's identifier, compared as its decoded string form.
    pub fn id(&self) -> Result<&'a str> {
        self.required_str("id")
    }

    pub fn series_name(&self) -> Result<&'a str> {
        self.required_str("series name")
    }

    pub fn issue_number(&self) -> Result<&'a str> {
        self.required_str("issue number")
    }

    /// Header line for this issue, e.g. `Fantastic Four #1`.
    pub fn title(&self) -> Result<String> {
        Ok(format!("{} #{}", self.series_name()?, self.issue_number()?))
    }

    fn required_str(&self, key: &str) -> Result<&'a str> {
        optional_str(self.fields, key)?.ok_or_else(|| CreditsError::MalformedRecord {
            collection: ISSUES,
            index: self.index,
            reason: format!("missing '{key}' key"),
        })
    }
}

/// One story or feature within an issue, with its creator credits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceRecord<'a> {
    index: usize,
    fields: &'a Fields,
}

impl<'a> SequenceRecord<'a> {
    pub fn new(index: usize, fields: &'a Fields) -> Self {
        Self { index, fields }
    }

    /// View element `index` of the sequences collection.
    pub fn from_value(index: usize, value: &'a Value) -> Result<Self> {
        object_at(SEQUENCES, value, index).map(|fields| Self::new(index, fields))
    }

    /// Position of this record in the sequences collection (source order).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &'a Fields {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Id of the issue this sequence belongs to.
    pub fn issue_id(&self) -> Result<&'a str> {
        optional_str(self.fields, "issue")?.ok_or_else(|| self.malformed("missing 'issue' key"))
    }

    /// Position of the sequence within its issue.
    ///
    /// Stored as a decimal string in the source data; a plain integer is
    /// accepted too.
    pub fn sequence_number(&self) -> Result<i64> {
        match self.fields.get("sequence_number") {
            Some(Value::String(s)) => s.trim().parse().map_err(|_| {
                self.malformed(&format!("sequence_number '{s}' is not an integer"))
            }),
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| self.malformed(&format!("sequence_number {n} is not an integer"))),
            Some(other) => Err(CreditsError::TypeMismatch {
                field: "sequence_number".to_string(),
                expected: "string",
                found: json_type_name(other),
            }),
            None => Err(self.malformed("missing 'sequence_number' key")),
        }
    }

    /// The credit string for `field`, if this sequence has one.
    ///
    /// A credit stored as anything but a string is a `TypeMismatch`.
    pub fn credit(&self, field: CreditField) -> Result<Option<&'a str>> {
        match field.field_name() {
            Some(name) => optional_str(self.fields, name),
            None => Ok(None),
        }
    }

    fn malformed(&self, reason: &str) -> CreditsError {
        CreditsError::MalformedRecord {
            collection: SEQUENCES,
            index: self.index,
            reason: reason.to_string(),
        }
    }
}
