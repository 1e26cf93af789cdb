//! Collector-facing ingestion: upserts and batch commit persistence.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::services::metrics_service::report_cache_key;
use crate::domain::commit_batch::{CommitBatch, CommitRecord};
use crate::domain::entities::{NewCommit, NewDeveloper, NewProject, NewRepository, Project, Repository};
use crate::domain::repositories::{
    CommitRepository, DeveloperRepository, ProjectRepository, RepoRepository,
};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

/// Write-side service mirroring the collector's database writes.
///
/// Projects and repositories are upserted by their natural keys; commits are
/// accepted in batches, persisted by the background worker via
/// [`IngestService::persist_batch`], and deduplicated by hash.
pub struct IngestService {
    projects: Arc<dyn ProjectRepository>,
    repos: Arc<dyn RepoRepository>,
    developers: Arc<dyn DeveloperRepository>,
    commits: Arc<dyn CommitRepository>,
    cache: Arc<dyn CacheService>,
}

impl IngestService {
    /// Creates a new ingest service.
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

    /// Creates or updates a project keyed by name.
    pub async fn upsert_project(&self, new_project: NewProject) -> Result<Project, AppError> {
        self.projects.upsert(new_project).await
    }

    /// Creates or updates a repository within a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn upsert_repository(
        &self,
        project_name: &str,
        name: String,
        description: Option<String>,
        active_branches: i32,
    ) -> Result<Repository, AppError> {
        let project = self.require_project(project_name).await?;

        self.repos
            .upsert(NewRepository {
                project_id: project.id,
                name,
                description,
                active_branches,
            })
            .await
    }

    /// Resolves a commit batch against the catalog before queuing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown project or repository.
    pub async fn prepare_batch(
        &self,
        project_name: &str,
        repository_name: &str,
        records: Vec<CommitRecord>,
    ) -> Result<CommitBatch, AppError> {
        let project = self.require_project(project_name).await?;

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

        Ok(CommitBatch {
            project_id: project.id,
            repository_id: repository.id,
            project_name: project.name,
            repository_name: repository.name,
            commits: records,
        })
    }

    /// Persists a queued commit batch.
    ///
    /// Upserts every distinct author by email, inserts the commits with
    /// hash deduplication, and invalidates cached reports for the affected
    /// authors. Returns the number of commits actually inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Called from the
    /// ingest worker, which retries with backoff.
    pub async fn persist_batch(&self, batch: CommitBatch) -> Result<u64, AppError> {
        if batch.is_empty() {
            return Ok(0);
        }

        // Resolve authors once per distinct email.
        let mut author_ids: HashMap<String, Uuid> = HashMap::new();
        for record in &batch.commits {
            if !author_ids.contains_key(&record.author_email) {
                let developer = self
                    .developers
                    .upsert(NewDeveloper {
                        name: record.author_name.clone(),
                        email: record.author_email.clone(),
                    })
                    .await?;
                author_ids.insert(record.author_email.clone(), developer.id);
            }
        }

        let new_commits: Vec<NewCommit> = batch
            .commits
            .iter()
            .map(|record| NewCommit {
                hash: record.hash.clone(),
                message: record.message.clone(),
                branch_name: record.branch_name.clone(),
                lines_added: record.lines_added,
                lines_deleted: record.lines_deleted,
                created_at: record.created_at,
                developer_id: author_ids[&record.author_email],
                repository_id: batch.repository_id,
                project_id: batch.project_id,
            })
            .collect();

        let inserted = self.commits.insert_batch(new_commits).await?;

        for email in batch.author_emails() {
            let key = report_cache_key(&batch.project_name, &batch.repository_name, email);
            if let Err(e) = self.cache.invalidate(&key).await {
                warn!("Failed to invalidate cached report {}: {}", key, e);
            }
        }

        Ok(inserted)
    }

    async fn require_project(&self, name: &str) -> Result<Project, AppError> {
        self.projects.find_by_name(name).await?.ok_or_else(|| {
            AppError::not_found("Project not found", json!({ "project": name }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Developer;
    use crate::domain::repositories::{
        MockCommitRepository, MockDeveloperRepository, MockProjectRepository, MockRepoRepository,
    };
    use crate::infrastructure::cache::{MockCacheService, NullCache};
    use chrono::Utc;

    fn record(hash: &str, email: &str) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            message: "change".to_string(),
            branch_name: Some("main".to_string()),
            lines_added: 10,
            lines_deleted: 2,
            created_at: Utc::now(),
            author_name: "Dev".to_string(),
            author_email: email.to_string(),
        }
    }

    fn batch(records: Vec<CommitRecord>) -> CommitBatch {
        CommitBatch {
            project_id: Uuid::new_v4(),
            repository_id: Uuid::new_v4(),
            project_name: "billing".to_string(),
            repository_name: "billing-api".to_string(),
            commits: records,
        }
    }

    #[tokio::test]
    async fn test_persist_batch_upserts_each_author_once() {
        let mut developers = MockDeveloperRepository::new();
        developers.expect_upsert().times(2).returning(|new_dev| {
            Ok(Developer {
                id: Uuid::new_v4(),
                name: new_dev.name,
                email: new_dev.email,
            })
        });

        let mut commits = MockCommitRepository::new();
        commits
            .expect_insert_batch()
            .withf(|commits| commits.len() == 3)
            .returning(|commits| Ok(commits.len() as u64));

        let svc = IngestService::new(
            Arc::new(MockProjectRepository::new()),
            Arc::new(MockRepoRepository::new()),
            Arc::new(developers),
            Arc::new(commits),
            Arc::new(NullCache),
        );

        let inserted = svc
            .persist_batch(batch(vec![
                record("h1", "a@example.com"),
                record("h2", "b@example.com"),
                record("h3", "a@example.com"),
            ]))
            .await
            .unwrap();

        assert_eq!(inserted, 3);
    }

    #[tokio::test]
    async fn test_persist_batch_invalidates_affected_reports() {
        let mut developers = MockDeveloperRepository::new();
        developers.expect_upsert().returning(|new_dev| {
            Ok(Developer {
                id: Uuid::new_v4(),
                name: new_dev.name,
                email: new_dev.email,
            })
        });

        let mut commits = MockCommitRepository::new();
        commits
            .expect_insert_batch()
            .returning(|commits| Ok(commits.len() as u64));

        // One invalidation per distinct author, keyed by the batch's names.
        let mut cache = MockCacheService::new();
        cache
            .expect_invalidate()
            .withf(|key| key == "devstats:billing:billing-api:a@example.com")
            .times(1)
            .returning(|_| Ok(()));
        cache
            .expect_invalidate()
            .withf(|key| key == "devstats:billing:billing-api:b@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let svc = IngestService::new(
            Arc::new(MockProjectRepository::new()),
            Arc::new(MockRepoRepository::new()),
            Arc::new(developers),
            Arc::new(commits),
            Arc::new(cache),
        );

        svc.persist_batch(batch(vec![
            record("h1", "a@example.com"),
            record("h2", "b@example.com"),
            record("h3", "a@example.com"),
        ]))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_persist_batch_empty_is_noop() {
        let svc = IngestService::new(
            Arc::new(MockProjectRepository::new()),
            Arc::new(MockRepoRepository::new()),
            Arc::new(MockDeveloperRepository::new()),
            Arc::new(MockCommitRepository::new()),
            Arc::new(NullCache),
        );

        assert_eq!(svc.persist_batch(batch(vec![])).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_prepare_batch_unknown_project() {
        let mut projects = MockProjectRepository::new();
        projects.expect_find_by_name().returning(|_| Ok(None));

        let svc = IngestService::new(
            Arc::new(projects),
            Arc::new(MockRepoRepository::new()),
            Arc::new(MockDeveloperRepository::new()),
            Arc::new(MockCommitRepository::new()),
            Arc::new(NullCache),
        );

        let err = svc
            .prepare_batch("ghost", "repo", vec![record("h1", "a@example.com")])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
