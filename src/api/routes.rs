//! API route configuration.

use crate::api::handlers::commits::commit_list_handler;
use crate::api::handlers::developers::{developer_list_handler, developer_stats_handler};
use crate::api::handlers::ingest::{
    ingest_commits_handler, upsert_project_handler, upsert_repository_handler,
};
use crate::api::handlers::projects::{project_detail_handler, project_list_handler};
use crate::api::handlers::repos::repository_list_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /projects`                                           - List projects
/// - `POST /projects`                                           - Upsert a project (collector)
/// - `GET  /projects/{project}`                                 - Project with repositories
/// - `GET  /projects/{project}/repos`                           - List repositories
/// - `POST /projects/{project}/repos`                           - Upsert a repository (collector)
/// - `GET  /projects/{project}/repos/{repo}/developers`         - Commit authors
/// - `GET  /projects/{project}/repos/{repo}/developers/{email}` - Developer KPI report
/// - `GET  /projects/{project}/repos/{repo}/commits`            - Paginated commit log
/// - `POST /projects/{project}/repos/{repo}/commits`            - Submit a commit batch (collector)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(project_list_handler).post(upsert_project_handler),
        )
        .route("/projects/{project}", get(project_detail_handler))
        .route(
            "/projects/{project}/repos",
            get(repository_list_handler).post(upsert_repository_handler),
        )
        .route(
            "/projects/{project}/repos/{repo}/developers",
            get(developer_list_handler),
        )
        .route(
            "/projects/{project}/repos/{repo}/developers/{email}",
            get(developer_stats_handler),
        )
        .route(
            "/projects/{project}/repos/{repo}/commits",
            get(commit_list_handler).post(ingest_commits_handler),
        )
}
