//! Health check handler probing the service's dependencies.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// `GET /health`
///
/// Probes the database, the cache, and the ingest queue. Returns `200` when
/// everything is reachable, `503` otherwise. The cache is advisory only and
/// does not degrade overall status; reports fall back to the database when
/// it is down.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.catalog_service.count_projects().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} projects", count)),
        Err(e) => CheckStatus::failed(format!("Database check failed: {}", e)),
    };

    let cache = if state.cache.health_check().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::failed("Cache backend unreachable")
    };

    let ingest_queue = if state.ingest_sender.is_closed() {
        CheckStatus::failed("Ingest worker is not running")
    } else {
        CheckStatus::ok(format!(
            "Accepting batches, capacity {}",
            state.ingest_sender.capacity()
        ))
    };

    let healthy = database.healthy && ingest_queue.healthy;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        checks: HealthChecks {
            database,
            cache,
            ingest_queue,
        },
    };

    (status, Json(response))
}
