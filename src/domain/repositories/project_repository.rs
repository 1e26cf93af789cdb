//! Repository trait for project data access.

use crate::domain::entities::{NewProject, Project};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_project.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates or updates a project keyed by its unique name.
    ///
    /// On conflict, `full_name`, `description`, and `updated_at` are replaced
    /// with the incoming values; the row id is stable across upserts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, new_project: NewProject) -> Result<Project, AppError>;

    /// Finds a project by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError>;

    /// Lists all projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Project>, AppError>;

    /// Counts all projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Deletes a project and, via cascade, its repositories and commits.
    ///
    /// Returns `Ok(true)` if the project existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_name(&self, name: &str) -> Result<bool, AppError>;
}
