//! Handler for the paginated commit log.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::api::dto::commit::{CommitInfo, CommitListResponse};
use crate::api::dto::pagination::{CommitQueryParams, PaginationMeta};
use crate::domain::repositories::CommitFilter;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/projects/{project}/repos/{repo}/commits`
///
/// Returns a page of the repository's commit log, newest first, with
/// optional `from`/`to` RFC3339 date filters.
pub async fn commit_list_handler(
    State(state): State<AppState>,
    Path((project_name, repository_name)): Path<(String, String)>,
    Query(params): Query<CommitQueryParams>,
) -> Result<Json<CommitListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, serde_json::Value::Null))?;

    let filter = CommitFilter::new(offset, limit)
        .with_date_range(params.date_filter.from, params.date_filter.to);

    let page = state
        .catalog_service
        .list_commits(&project_name, &repository_name, filter)
        .await?;

    let page_size = limit as u32;
    let total_pages = (page.total as u64).div_ceil(page_size as u64) as u32;

    Ok(Json(CommitListResponse {
        pagination: PaginationMeta {
            page: (offset / limit) as u32 + 1,
            page_size,
            total_items: page.total,
            total_pages,
        },
        total: page.total,
        items: page.items.into_iter().map(CommitInfo::from).collect(),
    }))
}
