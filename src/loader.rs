//! Loading the issues and sequences documents from a directory.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{CreditsError, Result};
use crate::record::{ISSUES, SEQUENCES};
use crate::store::{JsonDatabase, require_array};

const ISSUES_SUFFIX: &str = "issues.json";
const SEQUENCES_SUFFIX: &str = "sequences.json";

impl JsonDatabase {
    /// Load a database from the first-level files of `dir`.
    ///
    /// A file whose name ends in `issues.json` supplies the issues and one
    /// ending in `sequences.json` supplies the sequences. Both must be
    /// present, exactly once each, and hold a JSON array.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut issues_path: Option<PathBuf> = None;
        let mut sequences_path: Option<PathBuf> = None;

        let entries = fs::read_dir(dir).map_err(|e| CreditsError::SourceUnavailable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            // follows symlinks, so linked dumps count as data files
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // "sequences.json" doesn't end in "issues.json", so order is irrelevant
            if name.ends_with(ISSUES_SUFFIX) {
                claim(&mut issues_path, path, ISSUES)?;
            } else if name.ends_with(SEQUENCES_SUFFIX) {
                claim(&mut sequences_path, path, SEQUENCES)?;
            }
        }

        let (issues_path, sequences_path) = match (issues_path, sequences_path) {
            (Some(i), Some(s)) => (i, s),
            (Some(_), None) => return Err(missing(dir, "sequences")),
            (None, Some(_)) => return Err(missing(dir, "issues")),
            (None, None) => return Err(missing(dir, "either issues or sequences")),
        };

        let issues = read_collection(ISSUES, &issues_path)?;
        let sequences = read_collection(SEQUENCES, &sequences_path)?;
        let db = JsonDatabase::from_values(issues, sequences);
        debug!(
            issues = db.issue_count(),
            sequences = db.sequence_count(),
            "database loaded"
        );
        Ok(db)
    }
}

fn claim(slot: &mut Option<PathBuf>, path: PathBuf, collection: &str) -> Result<()> {
    if let Some(existing) = slot {
        return Err(CreditsError::SourceUnavailable {
            path,
            reason: format!(
                "more than one {collection} JSON file (already found {})",
                existing.display()
            ),
        });
    }
    *slot = Some(path);
    Ok(())
}

fn missing(dir: &Path, what: &str) -> CreditsError {
    CreditsError::SourceUnavailable {
        path: dir.to_path_buf(),
        reason: format!("couldn't find {what} JSON file"),
    }
}

fn read_collection(collection: &'static str, path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "reading {collection}");
    let file = File::open(path).map_err(|e| CreditsError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    require_array(collection, document)
}
