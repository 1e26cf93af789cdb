//! PostgreSQL implementation of the commit repository.
//!
//! Aggregation queries mirror the reporting SQL: per-developer totals, the
//! repository-wide maxima used as KPI denominators, and the paginated commit
//! log. Small/large thresholds come from [`crate::domain::kpi`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Commit, Developer, NewCommit};
use crate::domain::kpi::{LARGE_COMMIT_THRESHOLD, SMALL_COMMIT_THRESHOLD};
use crate::domain::repositories::{
    CommitAggregates, CommitFilter, CommitRepository, DeveloperActivity, RepositoryMaxima,
};
use crate::error::AppError;

/// PostgreSQL repository for commit storage and aggregation.
pub struct PgCommitRepository {
    pool: Arc<PgPool>,
}

impl PgCommitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommitRow {
    id: Uuid,
    hash: String,
    message: String,
    branch_name: Option<String>,
    lines_added: i32,
    lines_deleted: i32,
    created_at: DateTime<Utc>,
    developer_id: Uuid,
    repository_id: Uuid,
    project_id: Uuid,
}

impl From<CommitRow> for Commit {
    fn from(row: CommitRow) -> Self {
        Commit {
            id: row.id,
            hash: row.hash,
            message: row.message,
            branch_name: row.branch_name,
            lines_added: row.lines_added,
            lines_deleted: row.lines_deleted,
            created_at: row.created_at,
            developer_id: row.developer_id,
            repository_id: row.repository_id,
            project_id: row.project_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    email: String,
    last_commit_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct AggregatesRow {
    total_commits: i64,
    lines_added: i64,
    lines_deleted: i64,
    small_commits: i64,
    large_commits: i64,
    first_commit_at: Option<DateTime<Utc>>,
    last_commit_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct MaximaRow {
    total_commits: i64,
    max_lines_added: i32,
    max_lines_deleted: i32,
    small_commits: i64,
    large_commits: i64,
    commit_span_days: f64,
}

const COMMIT_COLUMNS: &str = "id, hash, message, branch_name, lines_added, lines_deleted, \
     created_at, developer_id, repository_id, project_id";

#[async_trait]
impl CommitRepository for PgCommitRepository {
    async fn insert_batch(&self, commits: Vec<NewCommit>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        for commit in &commits {
            let result = sqlx::query(
                r#"
                INSERT INTO commits (hash, message, branch_name, lines_added, lines_deleted,
                                     created_at, developer_id, repository_id, project_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (hash) DO NOTHING
                "#,
            )
            .bind(&commit.hash)
            .bind(&commit.message)
            .bind(&commit.branch_name)
            .bind(commit.lines_added)
            .bind(commit.lines_deleted)
            .bind(commit.created_at)
            .bind(commit.developer_id)
            .bind(commit.repository_id)
            .bind(commit.project_id)
            .execute(tx.as_mut())
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn authors_for_repository(
        &self,
        repository_id: Uuid,
    ) -> Result<Vec<DeveloperActivity>, AppError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT d.id, d.name, d.email, MAX(c.created_at) AS last_commit_at
            FROM commits c
            JOIN developers d ON d.id = c.developer_id
            WHERE c.repository_id = $1
            GROUP BY d.id, d.name, d.email
            ORDER BY last_commit_at DESC
            "#,
        )
        .bind(repository_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DeveloperActivity {
                developer: Developer {
                    id: r.id,
                    name: r.name,
                    email: r.email,
                },
                last_commit_at: r.last_commit_at,
            })
            .collect())
    }

    async fn aggregates_for_developer(
        &self,
        developer_id: Uuid,
        repository_id: Uuid,
    ) -> Result<CommitAggregates, AppError> {
        let row = sqlx::query_as::<_, AggregatesRow>(
            r#"
            SELECT
                COUNT(*) AS total_commits,
                COALESCE(SUM(lines_added), 0)::BIGINT AS lines_added,
                COALESCE(SUM(lines_deleted), 0)::BIGINT AS lines_deleted,
                COALESCE(SUM(CASE WHEN lines_added + lines_deleted <= $3 THEN 1 ELSE 0 END), 0)::BIGINT
                    AS small_commits,
                COALESCE(SUM(CASE WHEN lines_added + lines_deleted >= $4 THEN 1 ELSE 0 END), 0)::BIGINT
                    AS large_commits,
                MIN(created_at) AS first_commit_at,
                MAX(created_at) AS last_commit_at
            FROM commits
            WHERE developer_id = $1 AND repository_id = $2
            "#,
        )
        .bind(developer_id)
        .bind(repository_id)
        .bind(SMALL_COMMIT_THRESHOLD)
        .bind(LARGE_COMMIT_THRESHOLD)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(CommitAggregates {
            total_commits: row.total_commits,
            lines_added: row.lines_added,
            lines_deleted: row.lines_deleted,
            small_commits: row.small_commits,
            large_commits: row.large_commits,
            first_commit_at: row.first_commit_at,
            last_commit_at: row.last_commit_at,
        })
    }

    async fn repository_maxima(
        &self,
        repository_id: Uuid,
    ) -> Result<RepositoryMaxima, AppError> {
        let row = sqlx::query_as::<_, MaximaRow>(
            r#"
            SELECT
                COUNT(*) AS total_commits,
                COALESCE(MAX(lines_added), 0) AS max_lines_added,
                COALESCE(MAX(lines_deleted), 0) AS max_lines_deleted,
                COALESCE(SUM(CASE WHEN lines_added + lines_deleted <= $2 THEN 1 ELSE 0 END), 0)::BIGINT
                    AS small_commits,
                COALESCE(SUM(CASE WHEN lines_added + lines_deleted >= $3 THEN 1 ELSE 0 END), 0)::BIGINT
                    AS large_commits,
                COALESCE(EXTRACT(EPOCH FROM MAX(created_at) - MIN(created_at)) / 86400, 0)::DOUBLE PRECISION
                    AS commit_span_days
            FROM commits
            WHERE repository_id = $1
            "#,
        )
        .bind(repository_id)
        .bind(SMALL_COMMIT_THRESHOLD)
        .bind(LARGE_COMMIT_THRESHOLD)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(RepositoryMaxima {
            total_commits: row.total_commits,
            max_lines_added: row.max_lines_added,
            max_lines_deleted: row.max_lines_deleted,
            small_commits: row.small_commits,
            large_commits: row.large_commits,
            commit_span_days: row.commit_span_days,
        })
    }

    async fn list_for_repository(
        &self,
        repository_id: Uuid,
        filter: CommitFilter,
    ) -> Result<Vec<Commit>, AppError> {
        let sql = format!(
            r#"
            SELECT {COMMIT_COLUMNS}
            FROM commits
            WHERE repository_id = $1
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at <= $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#
        );

        let rows = sqlx::query_as::<_, CommitRow>(&sql)
            .bind(repository_id)
            .bind(filter.from_date)
            .bind(filter.to_date)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_for_repository(
        &self,
        repository_id: Uuid,
        from_date: Option<DateTime<Utc>>,
        to_date: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM commits
            WHERE repository_id = $1
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at <= $3)
            "#,
        )
        .bind(repository_id)
        .bind(from_date)
        .bind(to_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM commits")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
