//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{CatalogService, IngestService, MetricsService};
use crate::domain::commit_batch::CommitBatch;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgCommitRepository, PgDeveloperRepository, PgProjectRepository, PgRepoRepository,
};

/// Shared state holding the services, cache, and ingest queue sender.
///
/// Cloning is cheap; every field is an `Arc` or a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub metrics_service: Arc<MetricsService>,
    pub ingest_service: Arc<IngestService>,
    pub cache: Arc<dyn CacheService>,
    pub ingest_sender: mpsc::Sender<CommitBatch>,
}

impl AppState {
    /// Builds the state from a connection pool, wiring the PostgreSQL
    /// repositories into the services.
    pub fn new(
        pool: Arc<PgPool>,
        ingest_sender: mpsc::Sender<CommitBatch>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let projects = Arc::new(PgProjectRepository::new(pool.clone()));
        let repos = Arc::new(PgRepoRepository::new(pool.clone()));
        let developers = Arc::new(PgDeveloperRepository::new(pool.clone()));
        let commits = Arc::new(PgCommitRepository::new(pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            projects.clone(),
            repos.clone(),
            commits.clone(),
        ));
        let metrics_service = Arc::new(MetricsService::new(
            projects.clone(),
            repos.clone(),
            developers.clone(),
            commits.clone(),
            cache.clone(),
        ));
        let ingest_service = Arc::new(IngestService::new(
            projects,
            repos,
            developers,
            commits,
            cache.clone(),
        ));

        Self {
            catalog_service,
            metrics_service,
            ingest_service,
            cache,
            ingest_sender,
        }
    }
}
