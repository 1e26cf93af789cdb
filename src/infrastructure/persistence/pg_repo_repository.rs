//! PostgreSQL implementation of the source-repository repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewRepository, Repository};
use crate::domain::repositories::RepoRepository;
use crate::error::AppError;

/// PostgreSQL repository for source repositories.
pub struct PgRepoRepository {
    pool: Arc<PgPool>,
}

impl PgRepoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RepositoryRow {
    id: Uuid,
    project_id: Uuid,
    name: String,
    description: Option<String>,
    active_branches: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RepositoryRow> for Repository {
    fn from(row: RepositoryRow) -> Self {
        Repository {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            description: row.description,
            active_branches: row.active_branches,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const REPOSITORY_COLUMNS: &str =
    "id, project_id, name, description, active_branches, created_at, updated_at";

#[async_trait]
impl RepoRepository for PgRepoRepository {
    async fn upsert(&self, new_repository: NewRepository) -> Result<Repository, AppError> {
        let sql = format!(
            r#"
            INSERT INTO repositories (project_id, name, description, active_branches)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (project_id, name) DO UPDATE SET
                description = EXCLUDED.description,
                active_branches = EXCLUDED.active_branches,
                updated_at = now()
            RETURNING {REPOSITORY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RepositoryRow>(&sql)
            .bind(new_repository.project_id)
            .bind(&new_repository.name)
            .bind(&new_repository.description)
            .bind(new_repository.active_branches)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_name(
        &self,
        project_id: Uuid,
        name: &str,
    ) -> Result<Option<Repository>, AppError> {
        let sql = format!(
            "SELECT {REPOSITORY_COLUMNS} FROM repositories WHERE project_id = $1 AND name = $2"
        );

        let row = sqlx::query_as::<_, RepositoryRow>(&sql)
            .bind(project_id)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_project(&self, project_id: Uuid) -> Result<Vec<Repository>, AppError> {
        let sql = format!(
            "SELECT {REPOSITORY_COLUMNS} FROM repositories WHERE project_id = $1 ORDER BY created_at DESC"
        );

        let rows = sqlx::query_as::<_, RepositoryRow>(&sql)
            .bind(project_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM repositories")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
