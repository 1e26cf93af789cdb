//! Core domain entities representing the aggregated catalog.
//!
//! This module contains the fundamental data structures of the metrics
//! catalog. Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Project`] - A tracked project
//! - [`Repository`] - A source repository within a project
//! - [`Developer`] - A commit author, unique by email
//! - [`Commit`] - A single recorded commit
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewProject`, `NewRepository`, `NewDeveloper`, `NewCommit`. Creation types
//! carry natural keys and resolved foreign keys; the database assigns UUIDs.

pub mod commit;
pub mod developer;
pub mod project;
pub mod repository;

pub use commit::{Commit, NewCommit};
pub use developer::{Developer, NewDeveloper};
pub use project::{NewProject, Project};
pub use repository::{NewRepository, Repository};
