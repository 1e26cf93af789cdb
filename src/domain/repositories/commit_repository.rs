//! Repository trait for commit storage and activity aggregation.

use crate::domain::entities::{Commit, Developer, NewCommit};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A commit author together with their most recent commit in a repository.
#[derive(Debug, Clone)]
pub struct DeveloperActivity {
    pub developer: Developer,
    pub last_commit_at: Option<DateTime<Utc>>,
}

/// Aggregated commit totals for one developer within one repository.
#[derive(Debug, Clone)]
pub struct CommitAggregates {
    pub total_commits: i64,
    pub lines_added: i64,
    pub lines_deleted: i64,
    pub small_commits: i64,
    pub large_commits: i64,
    pub first_commit_at: Option<DateTime<Utc>>,
    pub last_commit_at: Option<DateTime<Utc>>,
}

/// Repository-wide denominators used to normalize KPI components.
///
/// `max_lines_added` / `max_lines_deleted` are per-commit maxima;
/// `total_commits`, `small_commits`, and `large_commits` are repository
/// totals; `commit_span_days` is the span between the repository's first and
/// last commit.
#[derive(Debug, Clone)]
pub struct RepositoryMaxima {
    pub total_commits: i64,
    pub max_lines_added: i32,
    pub max_lines_deleted: i32,
    pub small_commits: i64,
    pub large_commits: i64,
    pub commit_span_days: f64,
}

/// Filter criteria for commit-log queries.
///
/// Supports date range filtering and pagination.
#[derive(Debug, Clone)]
pub struct CommitFilter {
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub offset: i64,
    pub limit: i64,
}

impl CommitFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            from_date: None,
            to_date: None,
            offset,
            limit,
        }
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(
        mut self,
        from_date: Option<DateTime<Utc>>,
        to_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }
}

/// Repository interface for commit storage and per-repository aggregation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_commit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitRepository: Send + Sync {
    /// Inserts a batch of commits, skipping hashes already present.
    ///
    /// Returns the number of rows actually inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_batch(&self, commits: Vec<NewCommit>) -> Result<u64, AppError>;

    /// Distinct commit authors in a repository with their latest commit time,
    /// most recently active first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn authors_for_repository(
        &self,
        repository_id: Uuid,
    ) -> Result<Vec<DeveloperActivity>, AppError>;

    /// Aggregated totals for one developer within one repository.
    ///
    /// When the developer has no commits there, `total_commits` is zero and
    /// the timestamps are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn aggregates_for_developer(
        &self,
        developer_id: Uuid,
        repository_id: Uuid,
    ) -> Result<CommitAggregates, AppError>;

    /// Repository-wide maxima used as KPI normalization denominators.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn repository_maxima(&self, repository_id: Uuid)
    -> Result<RepositoryMaxima, AppError>;

    /// Lists commits of a repository, newest first, with pagination and
    /// optional date filtering.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_repository(
        &self,
        repository_id: Uuid,
        filter: CommitFilter,
    ) -> Result<Vec<Commit>, AppError>;

    /// Counts commits of a repository within an optional date range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for_repository(
        &self,
        repository_id: Uuid,
        from_date: Option<DateTime<Utc>>,
        to_date: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;

    /// Counts all commits across repositories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
