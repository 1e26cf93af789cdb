#![allow(dead_code)]

use chrono::{DateTime, Utc};
use metrics_aggregator::domain::commit_batch::CommitBatch;
use metrics_aggregator::infrastructure::cache::NullCache;
use metrics_aggregator::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub async fn create_test_project(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO projects (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_repository(pool: &PgPool, project_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO repositories (project_id, name, active_branches) VALUES ($1, $2, 1) RETURNING id",
    )
    .bind(project_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_developer(pool: &PgPool, name: &str, email: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO developers (name, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(clippy::too_many_arguments)]
pub async fn create_test_commit(
    pool: &PgPool,
    hash: &str,
    project_id: Uuid,
    repository_id: Uuid,
    developer_id: Uuid,
    lines_added: i32,
    lines_deleted: i32,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO commits \
         (hash, message, branch_name, lines_added, lines_deleted, created_at, developer_id, repository_id, project_id) \
         VALUES ($1, 'test commit', 'main', $2, $3, $4, $5, $6, $7)",
    )
    .bind(hash)
    .bind(lines_added)
    .bind(lines_deleted)
    .bind(created_at)
    .bind(developer_id)
    .bind(repository_id)
    .bind(project_id)
    .execute(pool)
    .await
    .unwrap();
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<CommitBatch>) {
    create_test_state_with_queue(pool, 100)
}

pub fn create_test_state_with_queue(
    pool: PgPool,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<CommitBatch>) {
    let (tx, rx) = mpsc::channel(queue_capacity);
    let state = AppState::new(Arc::new(pool), tx, Arc::new(NullCache::new()));
    (state, rx)
}
