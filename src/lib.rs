//! # comics-credits
//!
//! Find every story credit (a *sequence*) in which a named creator appears in
//! a given role, grouped by the comic-book issue it belongs to.
//!
//! ## Overview
//!
//! The data is two decoded JSON collections held in memory:
//! - **Issues**: bibliographic records, each identified by a string `id`
//! - **Sequences**: per-story credit records, each pointing at its issue
//!   through the `issue` field
//!
//! A query names one credit field (script, pencils, inks, colors, letters)
//! and a substring. This crate answers it eagerly: matches are grouped by
//! issue, sorted by `sequence_number`, and rendered as a report. The
//! `credit-stream` crate answers the same query lazily, one match at a time.
//!
//! ## Example
//!
//! ```
//! use comics_credits::{CreditField, JsonDatabase, report_matching_sequences};
//!
//! let db = JsonDatabase::from_json_str(
//!     r#"[{"id": "16556", "series name": "Fantastic Four", "issue number": "1"}]"#,
//!     r#"[{"issue": "16556", "sequence_number": "0", "script": "Stan Lee (credited)"}]"#,
//! )
//! .unwrap();
//!
//! let (report, count) = report_matching_sequences(&db, CreditField::Script, "Stan Lee").unwrap();
//! assert_eq!(count, 1);
//! assert!(report.starts_with("Fantastic Four #1\n"));
//! ```

pub mod cache;
pub mod cli;
pub mod error;
pub mod field;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod record;
pub mod render;
pub mod store;

pub use cache::IssueCache;
pub use cli::{CreditArgs, init_tracing};
pub use error::{CreditsError, Result};
pub use field::{CreditField, Query};
pub use matcher::matches;
pub use query::{
    IssueGroup, Match, collect_matches, group_matches, grouped_matches, join_sequence,
};
pub use record::{Fields, IssueRecord, SequenceRecord};
pub use render::{
    LABEL_WIDTH, SEQUENCE_FIELDS, render_field, render_grouped, render_sequence,
    report_matching_sequences,
};
pub use store::{Database, JsonDatabase};
