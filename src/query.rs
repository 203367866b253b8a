//! The credit-match join and its eager, grouped form.
//!
//! [`join_sequence`] is the single step shared by every way of running a
//! query: test one sequence, and if it matches, pair it with its issue.
//! [`collect_matches`] runs that step over the whole sequences collection in
//! source order; [`group_matches`] buckets the result by issue and sorts each
//! bucket by sequence number.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cache::IssueCache;
use crate::error::Result;
use crate::field::CreditField;
use crate::matcher::matches;
use crate::record::{IssueRecord, SequenceRecord};
use crate::store::Database;

/// A sequence that satisfied a query, plus the issue it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub issue: IssueRecord<'a>,
    pub sequence: SequenceRecord<'a>,
}

/// Test `sequence` against `(field, name)` and resolve its issue on a match.
pub fn join_sequence<'a, D: Database + ?Sized>(
    cache: &mut IssueCache<'a, D>,
    sequence: SequenceRecord<'a>,
    field: CreditField,
    name: &str,
) -> Result<Option<Match<'a>>> {
    if !matches(sequence, field, name)? {
        return Ok(None);
    }
    let issue = cache.resolve(sequence.issue_id()?)?;
    Ok(Some(Match { issue, sequence }))
}

/// Every match for `(field, name)`, in the source order of the sequences.
///
/// If either collection is absent or not an array there is nothing to join,
/// and the result is empty.
pub fn collect_matches<'a, D: Database + ?Sized>(
    db: &'a D,
    field: CreditField,
    name: &str,
) -> Result<Vec<Match<'a>>> {
    let mut found = Vec::new();
    if field == CreditField::None || db.issues().is_none() {
        return Ok(found);
    }
    let mut cache = IssueCache::new(db);
    for (index, value) in db.sequences().unwrap_or_default().iter().enumerate() {
        let sequence = SequenceRecord::from_value(index, value)?;
        if let Some(m) = join_sequence(&mut cache, sequence, field, name)? {
            found.push(m);
        }
    }
    Ok(found)
}

/// Orders decimal issue ids by numeric value without parsing them.
///
/// Leading zeros are ignored, then a shorter id sorts first and equal
/// lengths compare lexically. Non-decimal ids still get a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IssueKey<'a>(&'a str);

impl IssueKey<'_> {
    fn digits(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl Ord for IssueKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.digits(), other.digits());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for IssueKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// All matching sequences of one issue, ascending by sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueGroup<'a> {
    pub issue: IssueRecord<'a>,
    pub sequences: Vec<SequenceRecord<'a>>,
}

/// Group matches by issue (ascending numeric id), sorting each group by
/// numeric `sequence_number`. Ties keep their input order.
///
/// A matching sequence whose `sequence_number` isn't an integer fails the
/// whole grouping, even though a streamed scan would still yield it.
pub fn group_matches<'a>(
    found: impl IntoIterator<Item = Match<'a>>,
) -> Result<Vec<IssueGroup<'a>>> {
    let mut groups: BTreeMap<IssueKey<'a>, (IssueRecord<'a>, Vec<(i64, SequenceRecord<'a>)>)> =
        BTreeMap::new();
    for m in found {
        let number = m.sequence.sequence_number()?;
        groups
            .entry(IssueKey(m.issue.id()?))
            .or_insert_with(|| (m.issue, Vec::new()))
            .1
            .push((number, m.sequence));
    }

    Ok(groups
        .into_values()
        .map(|(issue, mut sequences)| {
            sequences.sort_by_key(|(number, _)| *number);
            IssueGroup {
                issue,
                sequences: sequences.into_iter().map(|(_, s)| s).collect(),
            }
        })
        .collect())
}

/// Run a query eagerly and return its matches grouped by issue.
pub fn grouped_matches<'a, D: Database + ?Sized>(
    db: &'a D,
    field: CreditField,
    name: &str,
) -> Result<Vec<IssueGroup<'a>>> {
    group_matches(collect_matches(db, field, name)?)
}
