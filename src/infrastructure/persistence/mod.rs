//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements bound at runtime.
//!
//! # Repositories
//!
//! - [`PgProjectRepository`] - Project catalog storage
//! - [`PgRepoRepository`] - Source repositories within projects
//! - [`PgDeveloperRepository`] - Commit author upserts and lookups
//! - [`PgCommitRepository`] - Commit storage and activity aggregation

pub mod pg_commit_repository;
pub mod pg_developer_repository;
pub mod pg_project_repository;
pub mod pg_repo_repository;

pub use pg_commit_repository::PgCommitRepository;
pub use pg_developer_repository::PgDeveloperRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pg_repo_repository::PgRepoRepository;
