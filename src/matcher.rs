//! Deciding whether one sequence matches a credit query.

use crate::error::Result;
use crate::field::CreditField;
use crate::record::SequenceRecord;

/// True if the `field` credit of `sequence` contains `query`.
///
/// Containment is a plain, case-sensitive substring test, so `"Stan Lee"`
/// matches `"Stan Lee (credited)"`. A missing credit is not a match; a
/// credit that isn't a string is an error.
pub fn matches(sequence: SequenceRecord<'_>, field: CreditField, query: &str) -> Result<bool> {
    Ok(sequence
        .credit(field)?
        .is_some_and(|credit| credit.contains(query)))
}
