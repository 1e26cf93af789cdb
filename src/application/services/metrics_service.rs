//! Developer activity queries and KPI report assembly.

use std::sync::Arc;

use crate::domain::kpi::{self, DeveloperReport};
use crate::domain::repositories::{
    CommitRepository, DeveloperActivity, DeveloperRepository, ProjectRepository, RepoRepository,
};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use serde_json::json;
use tracing::{debug, error};

/// Cache key for a developer's report within one repository.
pub fn report_cache_key(project: &str, repository: &str, email: &str) -> String {
    format!("devstats:{}:{}:{}", project, repository, email)
}

/// Service computing per-developer activity reports.
///
/// The report path runs two aggregate queries (developer totals and
/// repository maxima) plus the KPI formula, so finished reports are cached as
/// JSON. Cache reads are fail-open and writes are fire-and-forget; ingestion
/// invalidates keys for affected authors.
pub struct MetricsService {
    projects: Arc<dyn ProjectRepository>,
    repos: Arc<dyn RepoRepository>,
    developers: Arc<dyn DeveloperRepository>,
    commits: Arc<dyn CommitRepository>,
    cache: Arc<dyn CacheService>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        repos: Arc<dyn RepoRepository>,
        developers: Arc<dyn DeveloperRepository>,
        commits: Arc<dyn CommitRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            projects,
            repos,
            developers,
            commits,
            cache,
        }
    }

    /// Lists the distinct commit authors of a repository with their latest
    /// commit time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown project or repository.
    pub async fn developers_for_repository(
        &self,
        project_name: &str,
        repository_name: &str,
    ) -> Result<Vec<DeveloperActivity>, AppError> {
        let (_, repository) = self.resolve(project_name, repository_name).await?;
        self.commits.authors_for_repository(repository.id).await
    }

    /// Builds the full activity report for one developer in one repository.
    ///
    /// # Caching
    ///
    /// - On cache hit, the stored JSON report is returned directly
    /// - On miss, the report is computed and written back asynchronously
    /// - A cached entry that fails to deserialize is treated as a miss
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown project, repository, or
    /// email, and when the developer has no commits in the repository.
    pub async fn developer_report(
        &self,
        project_name: &str,
        repository_name: &str,
        email: &str,
    ) -> Result<DeveloperReport, AppError> {
        let (_, repository) = self.resolve(project_name, repository_name).await?;

        let developer = self
            .developers
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Developer not found", json!({ "email": email }))
            })?;

        let cache_key = report_cache_key(project_name, repository_name, email);

        if let Ok(Some(cached)) = self.cache.get(&cache_key).await {
            match serde_json::from_str::<DeveloperReport>(&cached) {
                Ok(report) => return Ok(report),
                Err(e) => debug!("Discarding stale cached report {}: {}", cache_key, e),
            }
        }

        let aggregates = self
            .commits
            .aggregates_for_developer(developer.id, repository.id)
            .await?;

        if aggregates.total_commits == 0 {
            return Err(AppError::not_found(
                "Developer has no commits in this repository",
                json!({
                    "email": email,
                    "project": project_name,
                    "repository": repository_name,
                }),
            ));
        }

        let maxima = self.commits.repository_maxima(repository.id).await?;

        let frequency = kpi::commit_frequency(
            aggregates.total_commits,
            aggregates.first_commit_at,
            aggregates.last_commit_at,
        );
        let score = kpi::score(&aggregates, frequency, &maxima);

        let report = DeveloperReport {
            id: developer.id,
            name: developer.name,
            email: developer.email,
            total_commits: aggregates.total_commits,
            lines_added: aggregates.lines_added,
            lines_deleted: aggregates.lines_deleted,
            small_commits: aggregates.small_commits,
            large_commits: aggregates.large_commits,
            commit_frequency: frequency,
            first_commit_at: aggregates.first_commit_at,
            last_commit_at: aggregates.last_commit_at,
            kpi: score,
        };

        // Write back asynchronously (fire-and-forget)
        if let Ok(serialized) = serde_json::to_string(&report) {
            let cache = self.cache.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set(&cache_key, &serialized, None).await {
                    error!("Failed to cache developer report: {}", e);
                }
            });
        }

        Ok(report)
    }

    async fn resolve(
        &self,
        project_name: &str,
        repository_name: &str,
    ) -> Result<
        (
            crate::domain::entities::Project,
            crate::domain::entities::Repository,
        ),
        AppError,
    > {
        let project = self
            .projects
            .find_by_name(project_name)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Project not found", json!({ "project": project_name }))
            })?;

        let repository = self
            .repos
            .find_by_name(project.id, repository_name)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Repository not found",
                    json!({ "project": project_name, "repository": repository_name }),
                )
            })?;

        Ok((project, repository))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Developer, Project, Repository};
    use crate::domain::repositories::{
        CommitAggregates, MockCommitRepository, MockDeveloperRepository, MockProjectRepository,
        MockRepoRepository, RepositoryMaxima,
    };
    use crate::infrastructure::cache::{MockCacheService, NullCache};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn test_project() -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "billing".to_string(),
            full_name: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_repository(project_id: Uuid) -> Repository {
        Repository {
            id: Uuid::new_v4(),
            project_id,
            name: "billing-api".to_string(),
            description: None,
            active_branches: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn resolving_mocks() -> (MockProjectRepository, MockRepoRepository) {
        let project = test_project();
        let repository = test_repository(project.id);

        let mut projects = MockProjectRepository::new();
        projects
            .expect_find_by_name()
            .returning(move |_| Ok(Some(project.clone())));

        let mut repos = MockRepoRepository::new();
        repos
            .expect_find_by_name()
            .returning(move |_, _| Ok(Some(repository.clone())));

        (projects, repos)
    }

    #[tokio::test]
    async fn test_developer_report_computes_kpi() {
        let (projects, repos) = resolving_mocks();

        let developer = Developer {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let mut developers = MockDeveloperRepository::new();
        developers
            .expect_find_by_email()
            .returning(move |_| Ok(Some(developer.clone())));

        let last = Utc::now();
        let first = last - Duration::days(10);

        let mut commits = MockCommitRepository::new();
        commits
            .expect_aggregates_for_developer()
            .returning(move |_, _| {
                Ok(CommitAggregates {
                    total_commits: 20,
                    lines_added: 300,
                    lines_deleted: 100,
                    small_commits: 2,
                    large_commits: 1,
                    first_commit_at: Some(first),
                    last_commit_at: Some(last),
                })
            });
        commits.expect_repository_maxima().returning(|_| {
            Ok(RepositoryMaxima {
                total_commits: 40,
                max_lines_added: 600,
                max_lines_deleted: 200,
                small_commits: 8,
                large_commits: 2,
                commit_span_days: 20.0,
            })
        });

        let svc = MetricsService::new(
            Arc::new(projects),
            Arc::new(repos),
            Arc::new(developers),
            Arc::new(commits),
            Arc::new(NullCache),
        );

        let report = svc
            .developer_report("billing", "billing-api", "alice@example.com")
            .await
            .unwrap();

        assert_eq!(report.total_commits, 20);
        assert_eq!(report.small_commits, 2);
        assert!((report.commit_frequency - 2.0).abs() < f64::EPSILON);
        assert!(report.kpi > 0.0 && report.kpi <= 1.0);
    }

    #[tokio::test]
    async fn test_developer_report_unknown_email() {
        let (projects, repos) = resolving_mocks();

        let mut developers = MockDeveloperRepository::new();
        developers.expect_find_by_email().returning(|_| Ok(None));

        let svc = MetricsService::new(
            Arc::new(projects),
            Arc::new(repos),
            Arc::new(developers),
            Arc::new(MockCommitRepository::new()),
            Arc::new(NullCache),
        );

        let err = svc
            .developer_report("billing", "billing-api", "ghost@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_developer_report_no_commits_in_repository() {
        let (projects, repos) = resolving_mocks();

        let developer = Developer {
            id: Uuid::new_v4(),
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        };
        let mut developers = MockDeveloperRepository::new();
        developers
            .expect_find_by_email()
            .returning(move |_| Ok(Some(developer.clone())));

        let mut commits = MockCommitRepository::new();
        commits
            .expect_aggregates_for_developer()
            .returning(|_, _| {
                Ok(CommitAggregates {
                    total_commits: 0,
                    lines_added: 0,
                    lines_deleted: 0,
                    small_commits: 0,
                    large_commits: 0,
                    first_commit_at: None,
                    last_commit_at: None,
                })
            });

        let svc = MetricsService::new(
            Arc::new(projects),
            Arc::new(repos),
            Arc::new(developers),
            Arc::new(commits),
            Arc::new(NullCache),
        );

        let err = svc
            .developer_report("billing", "billing-api", "bob@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    fn test_developer() -> Developer {
        Developer {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn developer_mock(developer: Developer) -> MockDeveloperRepository {
        let mut developers = MockDeveloperRepository::new();
        developers
            .expect_find_by_email()
            .returning(move |_| Ok(Some(developer.clone())));
        developers
    }

    fn stored_report(developer: &Developer) -> DeveloperReport {
        DeveloperReport {
            id: developer.id,
            name: developer.name.clone(),
            email: developer.email.clone(),
            total_commits: 42,
            lines_added: 500,
            lines_deleted: 120,
            small_commits: 3,
            large_commits: 2,
            commit_frequency: 1.5,
            first_commit_at: Some(Utc::now() - Duration::days(28)),
            last_commit_at: Some(Utc::now()),
            kpi: 0.61,
        }
    }

    #[tokio::test]
    async fn test_developer_report_served_from_cache() {
        let (projects, repos) = resolving_mocks();
        let developer = test_developer();
        let developers = developer_mock(developer.clone());

        let serialized = serde_json::to_string(&stored_report(&developer)).unwrap();
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .withf(|key| key == "devstats:billing:billing-api:alice@example.com")
            .returning(move |_| Ok(Some(serialized.clone())));

        // No expectations on the commit repository: a cached report must not
        // trigger the aggregate queries.
        let svc = MetricsService::new(
            Arc::new(projects),
            Arc::new(repos),
            Arc::new(developers),
            Arc::new(MockCommitRepository::new()),
            Arc::new(cache),
        );

        let report = svc
            .developer_report("billing", "billing-api", "alice@example.com")
            .await
            .unwrap();

        assert_eq!(report.total_commits, 42);
        assert_eq!(report.lines_added, 500);
        assert!((report.kpi - 0.61).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_developer_report_recomputes_on_corrupt_cache_entry() {
        let (projects, repos) = resolving_mocks();
        let developers = developer_mock(test_developer());

        let last = Utc::now();
        let first = last - Duration::days(10);

        let mut commits = MockCommitRepository::new();
        commits
            .expect_aggregates_for_developer()
            .times(1)
            .returning(move |_, _| {
                Ok(CommitAggregates {
                    total_commits: 20,
                    lines_added: 300,
                    lines_deleted: 100,
                    small_commits: 2,
                    large_commits: 1,
                    first_commit_at: Some(first),
                    last_commit_at: Some(last),
                })
            });
        commits.expect_repository_maxima().times(1).returning(|_| {
            Ok(RepositoryMaxima {
                total_commits: 40,
                max_lines_added: 600,
                max_lines_deleted: 200,
                small_commits: 8,
                large_commits: 2,
                commit_span_days: 20.0,
            })
        });

        let (written_tx, written_rx) = std::sync::mpsc::channel();
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .returning(|_| Ok(Some("{not valid json".to_string())));
        cache
            .expect_set()
            .withf(|key, value, _| {
                key == "devstats:billing:billing-api:alice@example.com"
                    && serde_json::from_str::<DeveloperReport>(value)
                        .is_ok_and(|r| r.total_commits == 20)
            })
            .returning(move |_, _, _| {
                written_tx.send(()).ok();
                Ok(())
            });

        let svc = MetricsService::new(
            Arc::new(projects),
            Arc::new(repos),
            Arc::new(developers),
            Arc::new(commits),
            Arc::new(cache),
        );

        let report = svc
            .developer_report("billing", "billing-api", "alice@example.com")
            .await
            .unwrap();

        // Undecodable entry is a miss: the report comes from the database.
        assert_eq!(report.total_commits, 20);
        assert!((report.commit_frequency - 2.0).abs() < f64::EPSILON);

        // Let the write-back task run.
        let mut written = written_rx.try_recv().is_ok();
        for _ in 0..10 {
            if written {
                break;
            }
            tokio::task::yield_now().await;
            written = written_rx.try_recv().is_ok();
        }
        assert!(written, "recomputed report was not written back");
    }

    #[test]
    fn test_report_cache_key_format() {
        assert_eq!(
            report_cache_key("p", "r", "a@b.com"),
            "devstats:p:r:a@b.com"
        );
    }
}
