//! Handlers for the collector-facing ingestion endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;
use tracing::info;
use validator::Validate;

use crate::api::dto::ingest::{CommitIngestRequest, ProjectUpsertRequest, RepositoryUpsertRequest};
use crate::api::dto::project::ProjectInfo;
use crate::api::dto::repository::RepositoryInfo;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/projects`
///
/// Registers a project or refreshes its metadata. Idempotent, keyed by name.
pub async fn upsert_project_handler(
    State(state): State<AppState>,
    Json(request): Json<ProjectUpsertRequest>,
) -> Result<Json<ProjectInfo>, AppError> {
    request.validate()?;

    let project = state.ingest_service.upsert_project(request.into()).await?;
    info!("Upserted project '{}'", project.name);

    Ok(Json(project.into()))
}

/// `POST /api/projects/{project}/repos`
///
/// Registers a repository within a project or refreshes its metadata.
pub async fn upsert_repository_handler(
    State(state): State<AppState>,
    Path(project_name): Path<String>,
    Json(request): Json<RepositoryUpsertRequest>,
) -> Result<Json<RepositoryInfo>, AppError> {
    request.validate()?;

    let repository = state
        .ingest_service
        .upsert_repository(
            &project_name,
            request.name.clone(),
            request.description.clone(),
            request.active_branches.unwrap_or(0),
        )
        .await?;
    info!("Upserted repository '{}/{}'", project_name, repository.name);

    Ok(Json(repository.into()))
}

/// `POST /api/projects/{project}/repos/{repo}/commits`
///
/// Accepts a batch of commits for asynchronous persistence. The batch is
/// resolved against the catalog up front so unknown projects and
/// repositories still fail with `404`, then queued for the ingest worker
/// and acknowledged with `202 Accepted`.
pub async fn ingest_commits_handler(
    State(state): State<AppState>,
    Path((project_name, repository_name)): Path<(String, String)>,
    Json(request): Json<CommitIngestRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    request.validate()?;

    let records = request.commits.into_iter().map(Into::into).collect();
    let batch = state
        .ingest_service
        .prepare_batch(&project_name, &repository_name, records)
        .await?;

    let accepted = batch.len();
    match state.ingest_sender.try_send(batch) {
        Ok(()) => {
            info!(
                "Queued {} commits for '{}/{}'",
                accepted, project_name, repository_name
            );
            Ok((StatusCode::ACCEPTED, Json(json!({ "accepted": accepted }))))
        }
        Err(TrySendError::Full(_)) => Err(AppError::unavailable(
            "Ingestion queue is full, retry later",
            serde_json::Value::Null,
        )),
        Err(TrySendError::Closed(_)) => Err(AppError::internal(
            "Ingestion worker is not running",
            serde_json::Value::Null,
        )),
    }
}
