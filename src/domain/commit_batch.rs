//! Commit batch model for asynchronous ingestion.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single commit as reported by a collector, before author resolution.
///
/// Carries the author's name and email; the ingest worker upserts the
/// developer row and resolves the foreign key at persist time.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub hash: String,
    pub message: String,
    pub branch_name: Option<String>,
    pub lines_added: i32,
    pub lines_deleted: i32,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_email: String,
}

/// A batch of commits accepted for one repository.
///
/// Used to pass ingested commits from HTTP handlers to the background worker
/// via a channel. This decouples the HTTP response from database writes: the
/// handler replies `202 Accepted` as soon as the batch is queued.
///
/// # Design
///
/// - Contains resolved project/repository ids so the worker never re-queries
///   the catalog
/// - Keeps the natural names alongside the ids for cache invalidation
/// - Cloneable for retrying across async boundaries
#[derive(Debug, Clone)]
pub struct CommitBatch {
    pub project_id: Uuid,
    pub repository_id: Uuid,
    pub project_name: String,
    pub repository_name: String,
    pub commits: Vec<CommitRecord>,
}

impl CommitBatch {
    /// Number of commits in the batch.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true when the batch carries no commits.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Distinct author emails in the batch, preserving first-seen order.
    pub fn author_emails(&self) -> Vec<&str> {
        let mut emails: Vec<&str> = Vec::new();
        for record in &self.commits {
            if !emails.contains(&record.author_email.as_str()) {
                emails.push(&record.author_email);
            }
        }
        emails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: &str, email: &str) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            message: "m".to_string(),
            branch_name: None,
            lines_added: 1,
            lines_deleted: 0,
            created_at: Utc::now(),
            author_name: "Dev".to_string(),
            author_email: email.to_string(),
        }
    }

    #[test]
    fn test_author_emails_deduplicates() {
        let batch = CommitBatch {
            project_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            project_name: "p".to_string(),
            repository_name: "r".to_string(),
            commits: vec![
                record("h1", "a@example.com"),
                record("h2", "b@example.com"),
                record("h3", "a@example.com"),
            ],
        };

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.author_emails(), vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = CommitBatch {
            project_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            project_name: "p".to_string(),
            repository_name: "r".to_string(),
            commits: vec![],
        };

        assert!(batch.is_empty());
        assert!(batch.author_emails().is_empty());
    }
}
