//! Resumable, pull-based credit-match generator.
//!
//! A [`MatchGenerator`] walks the sequences collection once. Each call to
//! [`resume`](MatchGenerator::resume) scans forward from where the previous
//! call stopped and suspends as soon as one match is found, so a caller can
//! print matches as they are discovered and stop at any point by dropping
//! the generator.
//!
//! Matches come out in source order. They are not grouped by issue or
//! sorted by sequence number; callers that need that do it on top, the way
//! [`group_matches`](comics_credits::group_matches) does.

use std::iter::FusedIterator;

use comics_credits::{
    CreditField, Database, IssueCache, Match, Result, SequenceRecord, join_sequence,
};
use serde_json::Value;
use tracing::trace;

/// Where a generator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Not resumed yet.
    Created,
    /// Suspended with one match available.
    Yielded,
    /// No more matches; terminal.
    Exhausted,
}

/// Lazily produces the matches of one `(field, query)` against a database.
///
/// State is the scan cursor, the fixed query, the issue cache and the
/// match produced by the last successful `resume`.
pub struct MatchGenerator<'a, D: ?Sized> {
    sequences: &'a [Value],
    cache: Option<IssueCache<'a, D>>,
    field: CreditField,
    query: String,
    cursor: usize,
    state: GeneratorState,
    current: Option<Match<'a>>,
}

impl<'a, D: Database + ?Sized> MatchGenerator<'a, D> {
    /// Create a generator over `db`.
    ///
    /// No database, or a database missing either collection, gives a
    /// generator that is exhausted on the first `resume`.
    pub fn new(db: Option<&'a D>, field: CreditField, query: impl Into<String>) -> Self {
        let usable = db.filter(|db| db.issues().is_some());
        let sequences = usable.and_then(|db| db.sequences()).unwrap_or_default();
        Self {
            sequences,
            cache: usable.map(IssueCache::new),
            field,
            query: query.into(),
            cursor: 0,
            state: GeneratorState::Created,
            current: None,
        }
    }

    /// Advance to the next match.
    ///
    /// Returns `Ok(true)` when a new match is available from
    /// [`current_match`](Self::current_match), `Ok(false)` once the scan is
    /// exhausted (and on every call after that). An integrity error ends the
    /// scan: it is returned once and the generator is exhausted afterwards.
    pub fn resume(&mut self) -> Result<bool> {
        self.current = None;
        if self.state == GeneratorState::Exhausted {
            return Ok(false);
        }
        let cache = match self.cache.as_mut() {
            Some(cache) if self.field != CreditField::None => cache,
            _ => {
                self.state = GeneratorState::Exhausted;
                return Ok(false);
            }
        };

        let sequences = self.sequences;
        while self.cursor < sequences.len() {
            let index = self.cursor;
            self.cursor += 1;
            let step = SequenceRecord::from_value(index, &sequences[index])
                .and_then(|sequence| join_sequence(cache, sequence, self.field, &self.query));
            match step {
                Ok(Some(found)) => {
                    trace!(index, "match");
                    self.current = Some(found);
                    self.state = GeneratorState::Yielded;
                    return Ok(true);
                }
                Ok(None) => {}
                Err(e) => {
                    self.state = GeneratorState::Exhausted;
                    return Err(e);
                }
            }
        }

        trace!(scanned = sequences.len(), "generator exhausted");
        self.state = GeneratorState::Exhausted;
        Ok(false)
    }

    /// The match produced by the last `resume`, if it returned `Ok(true)`.
    pub fn current_match(&self) -> Option<Match<'a>> {
        self.current
    }

    /// Take the current match, leaving none until the next `resume`.
    pub fn take_match(&mut self) -> Option<Match<'a>> {
        self.current.take()
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Index of the next sequence the scan will look at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of distinct issues resolved so far.
    pub fn resolved_issues(&self) -> usize {
        self.cache.as_ref().map_or(0, IssueCache::len)
    }
}

impl<'a, D: Database + ?Sized> Iterator for MatchGenerator<'a, D> {
    type Item = Result<Match<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.resume() {
            Ok(true) => self.take_match().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<D: Database + ?Sized> FusedIterator for MatchGenerator<'_, D> {}

/// Start a lazy query over `db`.
pub fn generate_matches<'a, D: Database + ?Sized>(
    db: &'a D,
    field: CreditField,
    query: impl Into<String>,
) -> MatchGenerator<'a, D> {
    MatchGenerator::new(Some(db), field, query)
}


#[cfg(test)]
mod equivalence_tests {
    use super::*;
    use crate::printer::print_matches;
    use comics_credits::{JsonDatabase, group_matches, grouped_matches, report_matching_sequences};
    use std::path::Path;

    fn fixtures() -> JsonDatabase {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        JsonDatabase::open(dir).unwrap()
    }

    /// Streamed matches, once grouped and sorted, equal the grouped query.
    fn assert_equivalence(field: CreditField, name: &str, expected: usize) {
        let db = fixtures();

        let streamed: Vec<Match<'_>> = generate_matches(&db, field, name)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(streamed.len(), expected, "streamed count for {field} {name:?}");

        let regrouped = group_matches(streamed).unwrap();
        let grouped = grouped_matches(&db, field, name).unwrap();
        assert_eq!(regrouped, grouped, "grouping differs for {field} {name:?}");

        // the fixture sequences are already in issue/sequence order, so the
        // printed stream and the grouped report are the same text
        let (stream_text, stream_count) = print_matches(Some(&db), field, name).unwrap();
        let (report_text, report_count) = report_matching_sequences(&db, field, name).unwrap();
        assert_eq!(stream_count, report_count);
        assert_eq!(stream_text, report_text, "output differs for {field} {name:?}");
    }

    macro_rules! equiv_test {
        ($name:ident, $field:expr, $query:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_equivalence($field, $query, $expected);
            }
        };
    }

    equiv_test!(equiv_script_stan_lee, CreditField::Script, "Stan Lee", 6);
    equiv_test!(equiv_script_credited, CreditField::Script, "Stan Lee (credited)", 2);
    equiv_test!(equiv_pencils_kirby, CreditField::Pencils, "Jack Kirby", 4);
    equiv_test!(equiv_pencils_ditko, CreditField::Pencils, "Steve Ditko", 2);
    equiv_test!(equiv_inks_ditko, CreditField::Inks, "Steve Ditko", 3);
    equiv_test!(equiv_inks_klein, CreditField::Inks, "George Klein", 3);
    equiv_test!(equiv_colors_goldberg, CreditField::Colors, "Stan Goldberg", 6);
    equiv_test!(equiv_letters_simek, CreditField::Letters, "Artie Simek", 4);
    equiv_test!(equiv_no_match, CreditField::Script, "Slartibartfast", 0);
    equiv_test!(equiv_nonexistent_name, CreditField::Script, "Nonexistent Name", 0);
    equiv_test!(equiv_lowercase_misses, CreditField::Script, "stan lee", 0);
    equiv_test!(equiv_none_field, CreditField::None, "Stan Lee", 0);

    #[test]
    fn test_stream_order_interleaved_issues() {
        let db = JsonDatabase::from_values(
            serde_json::json!([{"id": "1"}, {"id": "2"}]),
            serde_json::json!([
                {"issue": "2", "sequence_number": "3", "script": "Stan Lee"},
                {"issue": "1", "sequence_number": "1", "script": "Stan Lee"},
                {"issue": "2", "sequence_number": "1", "script": "Stan Lee"}
            ]),
        );
        let streamed: Vec<(usize, &str)> = generate_matches(&db, CreditField::Script, "Stan")
            .map(|m| {
                let m = m.unwrap();
                (m.sequence.index(), m.issue.id().unwrap())
            })
            .collect();
        assert_eq!(streamed, vec![(0, "2"), (1, "1"), (2, "2")]);

        let grouped = grouped_matches(&db, CreditField::Script, "Stan").unwrap();
        let order: Vec<Vec<usize>> = grouped
            .iter()
            .map(|g| g.sequences.iter().map(|s| s.index()).collect())
            .collect();
        assert_eq!(order, vec![vec![1], vec![2, 0]]);
    }
}
