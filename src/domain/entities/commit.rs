//! Commit entity representing a single recorded commit.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single commit as stored in the catalog.
///
/// `hash` is globally unique; ingesting the same commit twice is a no-op.
/// `created_at` is the commit timestamp from the source repository, not the
/// time of ingestion.
#[derive(Debug, Clone)]
pub struct Commit {
    pub id: Uuid,
    pub hash: String,
    pub message: String,
    pub branch_name: Option<String>,
    pub lines_added: i32,
    pub lines_deleted: i32,
    pub created_at: DateTime<Utc>,
    pub developer_id: Uuid,
    pub repository_id: Uuid,
    pub project_id: Uuid,
}

impl Commit {
    /// Total number of changed lines in this commit.
    pub fn lines_changed(&self) -> i32 {
        self.lines_added + self.lines_deleted
    }
}

/// Input data for inserting a commit with resolved foreign keys.
#[derive(Debug, Clone)]
pub struct NewCommit {
    pub hash: String,
    pub message: String,
    pub branch_name: Option<String>,
    pub lines_added: i32,
    pub lines_deleted: i32,
    pub created_at: DateTime<Utc>,
    pub developer_id: Uuid,
    pub repository_id: Uuid,
    pub project_id: Uuid,
}
