//! PostgreSQL implementation of the project repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewProject, Project};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

/// PostgreSQL repository for the project catalog.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    full_name: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            full_name: row.full_name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PROJECT_COLUMNS: &str = "id, name, full_name, description, created_at, updated_at";

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn upsert(&self, new_project: NewProject) -> Result<Project, AppError> {
        let sql = format!(
            r#"
            INSERT INTO projects (name, full_name, description, created_at, updated_at)
            VALUES ($1, $2, $3, COALESCE($4, now()), COALESCE($5, now()))
            ON CONFLICT (name) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
            RETURNING {PROJECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(&new_project.name)
            .bind(&new_project.full_name)
            .bind(&new_project.description)
            .bind(new_project.created_at)
            .bind(new_project.updated_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE name = $1");

        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Project>, AppError> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE name = $1")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
