//! Developer KPI scoring model.
//!
//! The KPI is a weighted sum of a developer's commit activity within a single
//! repository, each component normalized against repository-wide maxima so
//! that the score always lands in `[0, 1]`.
//!
//! # Components and weights
//!
//! | Component                   | Weight |
//! |-----------------------------|--------|
//! | Normal commits              | 0.30   |
//! | Lines added                 | 0.25   |
//! | Lines deleted               | 0.25   |
//! | Few small commits (inverted)| 0.10   |
//! | Large commits               | 0.05   |
//! | Commit frequency            | 0.05   |
//!
//! A commit is *small* when it changes at most [`SMALL_COMMIT_THRESHOLD`]
//! lines and *large* when it changes at least [`LARGE_COMMIT_THRESHOLD`].
//! Normal commits are everything in between. The small-commit component is
//! inverted: the fewer trivial commits relative to the repository, the better.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repositories::commit_repository::{CommitAggregates, RepositoryMaxima};

/// Commits changing at most this many lines count as small.
pub const SMALL_COMMIT_THRESHOLD: i32 = 5;

/// Commits changing at least this many lines count as large.
pub const LARGE_COMMIT_THRESHOLD: i32 = 50;

const WEIGHT_NORMAL_COMMITS: f64 = 0.30;
const WEIGHT_LINES_ADDED: f64 = 0.25;
const WEIGHT_LINES_DELETED: f64 = 0.25;
const WEIGHT_SMALL_COMMITS: f64 = 0.10;
const WEIGHT_LARGE_COMMITS: f64 = 0.05;
const WEIGHT_COMMIT_FREQUENCY: f64 = 0.05;

/// A developer's full activity report for one repository.
///
/// Serializable so reports can be cached as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperReport {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub total_commits: i64,
    pub lines_added: i64,
    pub lines_deleted: i64,
    pub small_commits: i64,
    pub large_commits: i64,
    pub commit_frequency: f64,
    pub first_commit_at: Option<DateTime<Utc>>,
    pub last_commit_at: Option<DateTime<Utc>>,
    pub kpi: f64,
}

/// Average commits per day over the developer's activity window.
///
/// The window is the span between the first and last commit, floored at one
/// day so a single-day burst does not divide by zero. Returns `0.0` when the
/// developer has no recorded commits.
pub fn commit_frequency(
    total_commits: i64,
    first_commit_at: Option<DateTime<Utc>>,
    last_commit_at: Option<DateTime<Utc>>,
) -> f64 {
    match (first_commit_at, last_commit_at) {
        (Some(first), Some(last)) => {
            let days = (last - first).num_days().max(1);
            total_commits as f64 / days as f64
        }
        _ => 0.0,
    }
}

/// Computes the weighted KPI score for a developer within a repository.
///
/// `frequency` is the developer's commits-per-day value from
/// [`commit_frequency`]; `maxima` provides the repository-wide denominators.
/// Every component is clamped to `[0, 1]` before weighting, so the result is
/// always in `[0, 1]` regardless of input skew.
pub fn score(aggregates: &CommitAggregates, frequency: f64, maxima: &RepositoryMaxima) -> f64 {
    let normal_commits =
        aggregates.total_commits - aggregates.small_commits - aggregates.large_commits;

    let normalized_normal = normalize(normal_commits as f64, maxima.total_commits as f64);
    let normalized_added = normalize(aggregates.lines_added as f64, maxima.max_lines_added as f64);
    let normalized_deleted = normalize(
        aggregates.lines_deleted as f64,
        maxima.max_lines_deleted as f64,
    );
    let normalized_small = normalize(aggregates.small_commits as f64, maxima.small_commits as f64);
    let large_effect = normalize(aggregates.large_commits as f64, maxima.large_commits as f64);
    let normalized_frequency = normalize(frequency, maxima.commit_span_days);

    WEIGHT_NORMAL_COMMITS * normalized_normal
        + WEIGHT_LINES_ADDED * normalized_added
        + WEIGHT_LINES_DELETED * normalized_deleted
        + WEIGHT_SMALL_COMMITS * (1.0 - normalized_small)
        + WEIGHT_LARGE_COMMITS * large_effect
        + WEIGHT_COMMIT_FREQUENCY * normalized_frequency
}

/// Normalizes `value` against `max`, flooring the denominator at 1 and
/// clamping the result to `[0, 1]`.
fn normalize(value: f64, max: f64) -> f64 {
    (value / max.max(1.0)).min(1.0)
}
