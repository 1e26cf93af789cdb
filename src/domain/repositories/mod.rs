//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ProjectRepository`] - Project catalog operations
//! - [`RepoRepository`] - Source repositories within projects
//! - [`DeveloperRepository`] - Commit author upserts and lookups
//! - [`CommitRepository`] - Commit storage and activity aggregation
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod commit_repository;
pub mod developer_repository;
pub mod project_repository;
pub mod repo_repository;

pub use commit_repository::{
    CommitAggregates, CommitFilter, CommitRepository, DeveloperActivity, RepositoryMaxima,
};
pub use developer_repository::DeveloperRepository;
pub use project_repository::ProjectRepository;
pub use repo_repository::RepoRepository;

#[cfg(test)]
pub use commit_repository::MockCommitRepository;
#[cfg(test)]
pub use developer_repository::MockDeveloperRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use repo_repository::MockRepoRepository;
