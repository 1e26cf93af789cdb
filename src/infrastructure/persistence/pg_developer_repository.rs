//! PostgreSQL implementation of the developer repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Developer, NewDeveloper};
use crate::domain::repositories::DeveloperRepository;
use crate::error::AppError;

/// PostgreSQL repository for commit authors.
pub struct PgDeveloperRepository {
    pool: Arc<PgPool>,
}

impl PgDeveloperRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DeveloperRow {
    id: Uuid,
    name: String,
    email: String,
}

impl From<DeveloperRow> for Developer {
    fn from(row: DeveloperRow) -> Self {
        Developer {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

#[async_trait]
impl DeveloperRepository for PgDeveloperRepository {
    async fn upsert(&self, new_developer: NewDeveloper) -> Result<Developer, AppError> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            r#"
            INSERT INTO developers (name, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, email
            "#,
        )
        .bind(&new_developer.name)
        .bind(&new_developer.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, AppError> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            "SELECT id, name, email FROM developers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM developers")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
