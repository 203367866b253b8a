//! Memoized issue-id to issue-record resolution.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CreditsError, Result};
use crate::record::IssueRecord;
use crate::store::Database;

/// Resolves issue ids against a database, scanning the issues collection at
/// most once per distinct id.
///
/// Entries are never evicted or re-resolved: the database is immutable for
/// the lifetime of the borrow.
pub struct IssueCache<'a, D: ?Sized> {
    db: &'a D,
    resolved: HashMap<&'a str, IssueRecord<'a>>,
}

impl<'a, D: Database + ?Sized> IssueCache<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self {
            db,
            resolved: HashMap::new(),
        }
    }

    /// The issue whose `id` equals `issue_id`.
    ///
    /// Ids are compared as strings. An id with no matching issue means the
    /// dataset is inconsistent and fails with `UnresolvedForeignKey`.
    pub fn resolve(&mut self, issue_id: &str) -> Result<IssueRecord<'a>> {
        if let Some(issue) = self.resolved.get(issue_id) {
            return Ok(*issue);
        }

        debug!(issue_id, "issue cache miss");
        let issue = self.scan(issue_id)?;
        self.resolved.insert(issue.id()?, issue);
        Ok(issue)
    }

    fn scan(&self, issue_id: &str) -> Result<IssueRecord<'a>> {
        let db: &'a D = self.db;
        for (index, value) in db.issues().unwrap_or_default().iter().enumerate() {
            let issue = IssueRecord::from_value(index, value)?;
            if issue.id()? == issue_id {
                return Ok(issue);
            }
        }
        Err(CreditsError::UnresolvedForeignKey(issue_id.to_string()))
    }

    /// Number of distinct ids resolved so far.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn contains(&self, issue_id: &str) -> bool {
        self.resolved.contains_key(issue_id)
    }
}
