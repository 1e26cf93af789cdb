//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, repository interfaces, and the KPI
//! scoring model independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`kpi`] - Developer KPI scoring model
//! - [`commit_batch`] - Commit ingestion batch model
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Ingestion Flow
//!
//! 1. HTTP handler receives a commit batch for a repository
//! 2. [`commit_batch::CommitBatch`] is sent to a bounded channel
//! 3. [`crate::application::ingest_worker::run_ingest_worker`] persists
//!    batches with retry
//! 4. Affected cached developer reports are invalidated

pub mod commit_batch;
pub mod entities;
pub mod kpi;
pub mod repositories;
