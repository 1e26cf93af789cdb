//! Handlers for repository browsing endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::repository::RepositoryInfo;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/projects/{project}/repos`
///
/// Lists the repositories of a project, `204 No Content` when the project
/// has none.
pub async fn repository_list_handler(
    State(state): State<AppState>,
    Path(project_name): Path<String>,
) -> Result<Response, AppError> {
    let repositories = state.catalog_service.list_repositories(&project_name).await?;

    if repositories.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<RepositoryInfo> = repositories.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}
