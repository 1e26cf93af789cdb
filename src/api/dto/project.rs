//! DTOs for project endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::dto::repository::RepositoryInfo;
use crate::domain::entities::{Project, Repository};

/// A project without its repositories, as returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectInfo {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            full_name: project.full_name,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// A project with its repositories, as returned by the detail endpoint.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectInfo,
    pub repositories: Vec<RepositoryInfo>,
}

impl ProjectDetailResponse {
    pub fn new(project: Project, repositories: Vec<Repository>) -> Self {
        Self {
            project: project.into(),
            repositories: repositories.into_iter().map(Into::into).collect(),
        }
    }
}
