mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use metrics_aggregator::api::handlers::commits::commit_list_handler;
use sqlx::PgPool;
use uuid::Uuid;

fn test_app(state: metrics_aggregator::AppState) -> Router {
    Router::new()
        .route(
            "/api/projects/{project}/repos/{repo}/commits",
            get(commit_list_handler),
        )
        .with_state(state)
}

async fn seed_commits(pool: &PgPool, count: usize) -> (Uuid, Uuid) {
    let project_id = common::create_test_project(pool, "billing").await;
    let repo_id = common::create_test_repository(pool, project_id, "billing-api").await;
    let dev = common::create_test_developer(pool, "Alice", "alice@example.com").await;

    let now = Utc::now();
    for i in 0..count {
        common::create_test_commit(
            pool,
            &format!("hash{:04}", i),
            project_id,
            repo_id,
            dev,
            10,
            2,
            now - Duration::hours(i as i64),
        )
        .await;
    }

    (project_id, repo_id)
}

#[sqlx::test]
async fn test_commit_list_returns_page(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    seed_commits(&pool, 5).await;

    let response = server.get("/api/projects/billing/repos/billing-api/commits").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 5);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 25);
    assert_eq!(json["pagination"]["total_pages"], 1);
}

#[sqlx::test]
async fn test_commit_list_newest_first(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    seed_commits(&pool, 3).await;

    let response = server.get("/api/projects/billing/repos/billing-api/commits").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    // hash0000 is the most recent seed
    assert_eq!(items[0]["hash"], "hash0000");
    assert_eq!(items[2]["hash"], "hash0002");
}

#[sqlx::test]
async fn test_commit_list_pagination(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    seed_commits(&pool, 30).await;

    let response = server
        .get("/api/projects/billing/repos/billing-api/commits")
        .add_query_param("page", "2")
        .add_query_param("page_size", "10")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 30);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["page_size"], 10);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
    assert_eq!(json["items"][0]["hash"], "hash0010");
}

#[sqlx::test]
async fn test_commit_list_date_filter(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    // Commits every hour going back; keep only the most recent six.
    seed_commits(&pool, 24).await;
    let from = (Utc::now() - Duration::minutes(330)).to_rfc3339();

    let response = server
        .get("/api/projects/billing/repos/billing-api/commits")
        .add_query_param("from", &from)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 6);
}

#[sqlx::test]
async fn test_commit_list_invalid_page_size(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    seed_commits(&pool, 1).await;

    let response = server
        .get("/api/projects/billing/repos/billing-api/commits")
        .add_query_param("page_size", "5")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_commit_list_unknown_repository(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    common::create_test_project(&pool, "billing").await;

    let response = server.get("/api/projects/billing/repos/ghost/commits").await;

    response.assert_status_not_found();
}
