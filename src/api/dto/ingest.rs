//! Request DTOs for the ingestion endpoints used by collector agents.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::commit_batch::CommitRecord;
use crate::domain::entities::NewProject;

/// Payload for registering or refreshing a project.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectUpsertRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 512, message = "Full name must be at most 512 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    pub description: Option<String>,

    /// Upstream creation time reported by the collector.
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Upstream update time reported by the collector.
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ProjectUpsertRequest> for NewProject {
    fn from(request: ProjectUpsertRequest) -> Self {
        Self {
            name: request.name,
            full_name: request.full_name,
            description: request.description,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Payload for registering or refreshing a repository within a project.
#[derive(Debug, Deserialize, Validate)]
pub struct RepositoryUpsertRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Active branch count must not be negative"))]
    pub active_branches: Option<i32>,
}

/// A single commit in an ingestion batch.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CommitItem {
    #[validate(length(min = 7, max = 64, message = "Hash must be between 7 and 64 characters"))]
    pub hash: String,

    #[validate(length(max = 4096, message = "Message must be at most 4096 characters"))]
    pub message: String,

    #[validate(length(max = 255, message = "Branch name must be at most 255 characters"))]
    pub branch_name: Option<String>,

    #[validate(range(min = 0, message = "Line counts must not be negative"))]
    pub lines_added: i32,

    #[validate(range(min = 0, message = "Line counts must not be negative"))]
    pub lines_deleted: i32,

    pub created_at: chrono::DateTime<chrono::Utc>,

    #[validate(length(min = 1, max = 255, message = "Author name is required"))]
    pub author_name: String,

    #[validate(email(message = "Author email must be a valid email address"))]
    pub author_email: String,
}

impl From<CommitItem> for CommitRecord {
    fn from(item: CommitItem) -> Self {
        Self {
            hash: item.hash,
            message: item.message,
            branch_name: item.branch_name,
            lines_added: item.lines_added,
            lines_deleted: item.lines_deleted,
            created_at: item.created_at,
            author_name: item.author_name,
            author_email: item.author_email,
        }
    }
}

/// Payload for submitting a batch of commits.
#[derive(Debug, Deserialize, Validate)]
pub struct CommitIngestRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Batch must contain between 1 and 1000 commits"),
        nested
    )]
    pub commits: Vec<CommitItem>,
}
