//! Application layer orchestrating domain operations.
//!
//! - [`services`] - Catalog queries, KPI reports, and ingestion
//! - [`ingest_worker`] - Background task persisting queued commit batches

pub mod ingest_worker;
pub mod services;
