//! Handlers for developer activity endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::developer::{DeveloperInfo, DeveloperStatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/projects/{project}/repos/{repo}/developers`
///
/// Lists the commit authors of a repository, most recently active first.
/// Returns `204 No Content` for a repository without commits.
pub async fn developer_list_handler(
    State(state): State<AppState>,
    Path((project_name, repository_name)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let developers = state
        .metrics_service
        .developers_for_repository(&project_name, &repository_name)
        .await?;

    if developers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<DeveloperInfo> = developers.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

/// `GET /api/projects/{project}/repos/{repo}/developers/{email}`
///
/// Returns the per-repository activity report for one developer, including
/// the KPI score. `404` for an unknown email or a developer with no commits
/// in this repository.
pub async fn developer_stats_handler(
    State(state): State<AppState>,
    Path((project_name, repository_name, email)): Path<(String, String, String)>,
) -> Result<Json<DeveloperStatsResponse>, AppError> {
    let report = state
        .metrics_service
        .developer_report(&project_name, &repository_name, &email)
        .await?;

    Ok(Json(report.into()))
}
