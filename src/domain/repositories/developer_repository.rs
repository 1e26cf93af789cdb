//! Repository trait for developer data access.

use crate::domain::entities::{Developer, NewDeveloper};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing commit authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDeveloperRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Creates or updates a developer keyed by email.
    ///
    /// On conflict the display name is replaced; commit history is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, new_developer: NewDeveloper) -> Result<Developer, AppError>;

    /// Finds a developer by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, AppError>;

    /// Counts all developers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
