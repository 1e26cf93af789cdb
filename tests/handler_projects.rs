mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use metrics_aggregator::api::handlers::projects::{project_detail_handler, project_list_handler};
use metrics_aggregator::api::handlers::repos::repository_list_handler;
use sqlx::PgPool;

fn test_app(state: metrics_aggregator::AppState) -> Router {
    Router::new()
        .route("/api/projects", get(project_list_handler))
        .route("/api/projects/{project}", get(project_detail_handler))
        .route("/api/projects/{project}/repos", get(repository_list_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_project_list_empty_returns_no_content(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/api/projects").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[sqlx::test]
async fn test_project_list_returns_projects(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    common::create_test_project(&pool, "billing").await;
    common::create_test_project(&pool, "checkout").await;

    let response = server.get("/api/projects").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let names: Vec<&str> = items
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"billing"));
    assert!(names.contains(&"checkout"));
}

#[sqlx::test]
async fn test_project_detail_includes_repositories(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let project_id = common::create_test_project(&pool, "billing").await;
    common::create_test_repository(&pool, project_id, "billing-api").await;
    common::create_test_repository(&pool, project_id, "billing-worker").await;

    let response = server.get("/api/projects/billing").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "billing");
    assert_eq!(json["repositories"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_project_detail_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/api/projects/ghost").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_repository_list_empty_returns_no_content(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    common::create_test_project(&pool, "empty-project").await;

    let response = server.get("/api/projects/empty-project/repos").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[sqlx::test]
async fn test_repository_list_unknown_project(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/api/projects/ghost/repos").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_repository_list_returns_repositories(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let project_id = common::create_test_project(&pool, "billing").await;
    common::create_test_repository(&pool, project_id, "billing-api").await;

    let response = server.get("/api/projects/billing/repos").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "billing-api");
    assert_eq!(items[0]["active_branches"], 1);
}
