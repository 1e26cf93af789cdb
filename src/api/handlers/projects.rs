//! Handlers for project browsing endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::project::{ProjectDetailResponse, ProjectInfo};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/projects`
///
/// Lists all registered projects. Returns `204 No Content` when the catalog
/// is empty.
pub async fn project_list_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let projects = state.catalog_service.list_projects().await?;

    if projects.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<ProjectInfo> = projects.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

/// `GET /api/projects/{project}`
///
/// Returns one project with its repositories, or `404` if unknown.
pub async fn project_detail_handler(
    State(state): State<AppState>,
    Path(project_name): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let (project, repositories) = state.catalog_service.get_project(&project_name).await?;
    Ok(Json(ProjectDetailResponse::new(project, repositories)))
}
