//! Project and repository catalog queries.

use std::sync::Arc;

use crate::domain::entities::{Commit, Project, Repository};
use crate::domain::repositories::{
    CommitFilter, CommitRepository, ProjectRepository, RepoRepository,
};
use crate::error::AppError;
use serde_json::json;

/// A page of a repository's commit log.
#[derive(Debug, Clone)]
pub struct CommitPage {
    pub total: i64,
    pub items: Vec<Commit>,
}

/// Read-side service for browsing the aggregated catalog.
///
/// Resolves projects and repositories by their natural names and exposes
/// listing queries; all mutation goes through
/// [`crate::application::services::IngestService`].
pub struct CatalogService {
    projects: Arc<dyn ProjectRepository>,
    repos: Arc<dyn RepoRepository>,
    commits: Arc<dyn CommitRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        repos: Arc<dyn RepoRepository>,
        commits: Arc<dyn CommitRepository>,
    ) -> Self {
        Self {
            projects,
            repos,
            commits,
        }
    }

    /// Lists all projects without their repositories.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.projects.list().await
    }

    /// Counts registered projects. Used by the health check as a cheap
    /// connectivity probe.
    pub async fn count_projects(&self) -> Result<i64, AppError> {
        self.projects.count().await
    }

    /// Retrieves a project by name together with its repositories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn get_project(&self, name: &str) -> Result<(Project, Vec<Repository>), AppError> {
        let project = self.require_project(name).await?;
        let repositories = self.repos.list_by_project(project.id).await?;
        Ok((project, repositories))
    }

    /// Lists the repositories of a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn list_repositories(&self, project_name: &str) -> Result<Vec<Repository>, AppError> {
        let project = self.require_project(project_name).await?;
        self.repos.list_by_project(project.id).await
    }

    /// Lists a page of a repository's commit log, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown project or repository.
    pub async fn list_commits(
        &self,
        project_name: &str,
        repository_name: &str,
        filter: CommitFilter,
    ) -> Result<CommitPage, AppError> {
        let (_, repository) = self.require_repository(project_name, repository_name).await?;

        let total = self
            .commits
            .count_for_repository(repository.id, filter.from_date, filter.to_date)
            .await?;
        let items = self.commits.list_for_repository(repository.id, filter).await?;

        Ok(CommitPage { total, items })
    }

    /// Resolves a project by name or fails with 404.
    pub async fn require_project(&self, name: &str) -> Result<Project, AppError> {
        self.projects.find_by_name(name).await?.ok_or_else(|| {
            AppError::not_found("Project not found", json!({ "project": name }))
        })
    }

    /// Resolves a repository within a project or fails with 404.
    pub async fn require_repository(
        &self,
        project_name: &str,
        repository_name: &str,
    ) -> Result<(Project, Repository), AppError> {
        let project = self.require_project(project_name).await?;

        let repository = self
            .repos
            .find_by_name(project.id, repository_name)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Repository not found",
                    json!({ "project": project_name, "repository": repository_name }),
                )
            })?;

        Ok((project, repository))
    }
}
