//! Print-as-you-go formatting of streamed matches.

use comics_credits::{CreditField, Database, Match, Result, render_sequence};

use crate::generator::MatchGenerator;

/// Formats a stream of matches, printing an issue title only when it
/// differs from the previous match's.
///
/// Source order can interleave issues, so the same title may be printed
/// more than once over a whole stream.
#[derive(Debug, Default)]
pub struct MatchPrinter {
    last_title: Option<String>,
    printed: usize,
}

impl MatchPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one match to `out`, separated from the previous by a blank line.
    ///
    /// Nothing is written if the issue title can't be built.
    pub fn print(&mut self, out: &mut String, found: Match<'_>) -> Result<()> {
        let title = found.issue.title()?;
        if self.printed > 0 {
            out.push('\n');
        }
        if self.last_title.as_deref() != Some(title.as_str()) {
            out.push_str(&title);
            out.push('\n');
            self.last_title = Some(title);
        }
        render_sequence(out, found.sequence)?;
        self.printed += 1;
        Ok(())
    }

    /// Number of matches printed so far.
    pub fn printed(&self) -> usize {
        self.printed
    }
}

/// Drive a generator to exhaustion, printing each match as it is produced.
///
/// Returns `(output, match_count)`.
pub fn print_matches<D: Database + ?Sized>(
    db: Option<&D>,
    field: CreditField,
    name: &str,
) -> Result<(String, usize)> {
    let mut generator = MatchGenerator::new(db, field, name);
    let mut printer = MatchPrinter::new();
    let mut out = String::new();
    while generator.resume()? {
        if let Some(found) = generator.take_match() {
            printer.print(&mut out, found)?;
        }
    }
    Ok((out, printer.printed()))
}
