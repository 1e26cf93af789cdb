//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

/// Per-dependency health results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub cache: CheckStatus,
    pub ingest_queue: CheckStatus,
}

/// Result of a single dependency check.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub healthy: bool,
    pub message: String,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            healthy: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
        }
    }
}
