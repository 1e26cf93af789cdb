//! DTOs for the commit log endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Commit;

/// A single commit in the log.
#[derive(Debug, Serialize)]
pub struct CommitInfo {
    pub id: Uuid,
    pub hash: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    pub lines_added: i32,
    pub lines_deleted: i32,
    pub created_at: DateTime<Utc>,
    pub developer_id: Uuid,
}

impl From<Commit> for CommitInfo {
    fn from(commit: Commit) -> Self {
        Self {
            id: commit.id,
            hash: commit.hash,
            message: commit.message,
            branch_name: commit.branch_name,
            lines_added: commit.lines_added,
            lines_deleted: commit.lines_deleted,
            created_at: commit.created_at,
            developer_id: commit.developer_id,
        }
    }
}

/// Paginated commit log response.
#[derive(Debug, Serialize)]
pub struct CommitListResponse {
    pub pagination: PaginationMeta,
    pub total: i64,
    pub items: Vec<CommitInfo>,
}
