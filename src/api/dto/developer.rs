//! DTOs for developer endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::kpi::DeveloperReport;
use crate::domain::repositories::DeveloperActivity;

/// A commit author in a repository's developer list.
#[derive(Debug, Serialize)]
pub struct DeveloperInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit_at: Option<DateTime<Utc>>,
}

impl From<DeveloperActivity> for DeveloperInfo {
    fn from(activity: DeveloperActivity) -> Self {
        Self {
            id: activity.developer.id,
            name: activity.developer.name,
            email: activity.developer.email,
            last_commit_at: activity.last_commit_at,
        }
    }
}

/// Full per-repository activity report for one developer.
#[derive(Debug, Serialize)]
pub struct DeveloperStatsResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub total_commits: i64,
    pub lines_added: i64,
    pub lines_deleted: i64,
    pub small_commits: i64,
    pub large_commits: i64,
    pub commit_frequency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_commit_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit_at: Option<DateTime<Utc>>,
    pub kpi: f64,
}

impl From<DeveloperReport> for DeveloperStatsResponse {
    fn from(report: DeveloperReport) -> Self {
        Self {
            id: report.id,
            name: report.name,
            email: report.email,
            total_commits: report.total_commits,
            lines_added: report.lines_added,
            lines_deleted: report.lines_deleted,
            small_commits: report.small_commits,
            large_commits: report.large_commits,
            commit_frequency: report.commit_frequency,
            first_commit_at: report.first_commit_at,
            last_commit_at: report.last_commit_at,
            kpi: report.kpi,
        }
    }
}
