//! Repository trait for source-repository data access.

use crate::domain::entities::{NewRepository, Repository};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing source repositories within projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRepoRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoRepository: Send + Sync {
    /// Creates or updates a repository keyed by `(project_id, name)`.
    ///
    /// On conflict, `description` and `active_branches` are replaced and
    /// `updated_at` is bumped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, new_repository: NewRepository) -> Result<Repository, AppError>;

    /// Finds a repository by name within a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(
        &self,
        project_id: Uuid,
        name: &str,
    ) -> Result<Option<Repository>, AppError>;

    /// Lists all repositories of a project, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_project(&self, project_id: Uuid) -> Result<Vec<Repository>, AppError>;

    /// Counts all repositories across projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
