//! Text rendering of sequences and the grouped report.
//!
//! Each rendered field is one line: the field name right-aligned in an
//! 18-column label, `": "`, then the value.
//!
//! ```text
//!              title: The Fantastic Four!
//!            feature: Fantastic Four
//!             script: Stan Lee
//! ```

use std::fmt::Write;

use serde_json::Value;

use crate::error::{CreditsError, Result, json_type_name};
use crate::field::CreditField;
use crate::query::{IssueGroup, grouped_matches};
use crate::record::SequenceRecord;
use crate::store::Database;

/// Width of the right-aligned label column.
pub const LABEL_WIDTH: usize = 18;

/// Sequence fields printed, in order. Absent fields are skipped.
pub const SEQUENCE_FIELDS: [&str; 6] = ["title", "feature", "script", "pencils", "inks", "colors"];

/// Append one `label: value` line.
pub fn render_field(out: &mut String, key: &str, value: &Value) -> Result<()> {
    if key.len() > LABEL_WIDTH {
        return Err(CreditsError::FieldNameTooLong(key.to_string()));
    }
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        other => {
            return Err(CreditsError::TypeMismatch {
                field: key.to_string(),
                expected: "string, bool or integer",
                found: json_type_name(other),
            });
        }
    };
    // writing into a String can't fail
    let _ = writeln!(out, "{key:>width$}: {text}", width = LABEL_WIDTH);
    Ok(())
}

/// Append the whitelisted fields of `sequence`.
pub fn render_sequence(out: &mut String, sequence: SequenceRecord<'_>) -> Result<()> {
    for key in SEQUENCE_FIELDS {
        if let Some(value) = sequence.get(key) {
            render_field(out, key, value)?;
        }
    }
    Ok(())
}

/// Render grouped matches: each issue's title line followed by its
/// sequences, with a blank line between sequences and between issues.
pub fn render_grouped(groups: &[IssueGroup<'_>]) -> Result<String> {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&group.issue.title()?);
        out.push('\n');
        for (j, sequence) in group.sequences.iter().enumerate() {
            if j > 0 {
                out.push('\n');
            }
            render_sequence(&mut out, *sequence)?;
        }
    }
    Ok(out)
}

/// Run a query and render the grouped report.
///
/// Returns `(report, match_count)`; an empty report means nothing matched.
pub fn report_matching_sequences<D: Database + ?Sized>(
    db: &D,
    field: CreditField,
    name: &str,
) -> Result<(String, usize)> {
    let groups = grouped_matches(db, field, name)?;
    let count = groups.iter().map(|g| g.sequences.len()).sum();
    Ok((render_grouped(&groups)?, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Fields;
    use crate::store::JsonDatabase;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_render_field_alignment() {
        let mut out = String::new();
        render_field(&mut out, "script", &json!("Stan Lee")).unwrap();
        assert_eq!(out, "            script: Stan Lee\n");
    }

    #[test]
    fn test_render_field_scalars() {
        let mut out = String::new();
        render_field(&mut out, "title by gcd", &json!(false)).unwrap();
        render_field(&mut out, "page count", &json!(36)).unwrap();
        assert_eq!(
            out,
            "      title by gcd: false\n        page count: 36\n"
        );
    }

    #[test]
    fn test_render_field_max_width() {
        let mut out = String::new();
        render_field(&mut out, "abcdefghijklmnopqr", &json!("x")).unwrap();
        assert_eq!(out, "abcdefghijklmnopqr: x\n");
    }

    #[test]
    fn test_render_field_too_long() {
        let mut out = String::new();
        let err = render_field(&mut out, "abcdefghijklmnopqrs", &json!("x")).unwrap_err();
        assert!(matches!(err, CreditsError::FieldNameTooLong(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_field_rejects_other_types() {
        let mut out = String::new();
        for value in [json!(1.5), json!(null), json!([]), json!({})] {
            let err = render_field(&mut out, "title", &value).unwrap_err();
            assert!(matches!(err, CreditsError::TypeMismatch { .. }));
        }
    }

    #[test]
    fn test_render_sequence_whitelist_order() {
        let f = fields(json!({
            "colors": "C",
            "characters": "not printed",
            "script": "S",
            "title": "T",
            "letters": "not printed either",
            "issue": "1"
        }));
        let mut out = String::new();
        render_sequence(&mut out, SequenceRecord::new(0, &f)).unwrap();
        assert_eq!(
            out,
            "             title: T\n            script: S\n            colors: C\n"
        );
    }

    #[test]
    fn test_report_fantastic_four() {
        let db = JsonDatabase::from_values(
            json!([{"id": "16556", "series name": "Fantastic Four", "issue number": "1"}]),
            json!([
                {"issue": "16556", "sequence_number": "2", "script": "Stan Lee", "title": "B"},
                {"issue": "16556", "sequence_number": "0", "script": "Stan Lee"},
                {"issue": "16556", "sequence_number": "5", "script": "Stan Lee", "title": "C"}
            ]),
        );
        let (report, count) = report_matching_sequences(&db, CreditField::Script, "Stan Lee").unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            report,
            "Fantastic Four #1\n\
             \x20           script: Stan Lee\n\
             \n\
             \x20            title: B\n\
             \x20           script: Stan Lee\n\
             \n\
             \x20            title: C\n\
             \x20           script: Stan Lee\n"
        );
    }

    #[test]
    fn test_report_separates_issues() {
        let db = JsonDatabase::from_values(
            json!([
                {"id": "2", "series name": "B", "issue number": "1"},
                {"id": "1", "series name": "A", "issue number": "7"}
            ]),
            json!([
                {"issue": "2", "sequence_number": "0", "inks": "Ditko"},
                {"issue": "1", "sequence_number": "0", "inks": "Ditko"}
            ]),
        );
        let (report, _) = report_matching_sequences(&db, CreditField::Inks, "Ditko").unwrap();
        assert_eq!(
            report,
            "A #7\n              inks: Ditko\n\nB #1\n              inks: Ditko\n"
        );
    }

    #[test]
    fn test_report_empty() {
        let db = JsonDatabase::from_values(json!([]), json!([]));
        let (report, count) = report_matching_sequences(&db, CreditField::Script, "x").unwrap();
        assert!(report.is_empty());
        assert_eq!(count, 0);
    }
}
