//! Business logic services for the application layer.

pub mod catalog_service;
pub mod ingest_service;
pub mod metrics_service;

pub use catalog_service::{CatalogService, CommitPage};
pub use ingest_service::IngestService;
pub use metrics_service::MetricsService;
