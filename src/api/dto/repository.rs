//! DTOs for repository endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Repository;

/// A source repository as returned by the API.
#[derive(Debug, Serialize)]
pub struct RepositoryInfo {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active_branches: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Repository> for RepositoryInfo {
    fn from(repository: Repository) -> Self {
        Self {
            id: repository.id,
            name: repository.name,
            description: repository.description,
            active_branches: repository.active_branches,
            created_at: repository.created_at,
            updated_at: repository.updated_at,
        }
    }
}
