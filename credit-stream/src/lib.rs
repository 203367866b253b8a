//! Lazy credit-match queries for comics-credits.
//!
//! This crate answers the same queries as the grouped report, but one match
//! at a time: a [`MatchGenerator`] suspends after each match and resumes on
//! demand, so results can be printed while the scan is still running and the
//! caller can stop early. Matches arrive in source order, and the
//! [`MatchPrinter`] only repeats an issue header when the issue changes.

pub mod generator;
pub mod printer;

pub use generator::{GeneratorState, MatchGenerator, generate_matches};
pub use printer::{MatchPrinter, print_matches};
