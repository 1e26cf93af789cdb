//! HTTP request handlers.
//!
//! Handlers stay thin: extract and validate input, call a service, map the
//! result into a DTO. All error mapping happens in
//! [`crate::error::AppError`]'s `IntoResponse` impl.

pub mod commits;
pub mod developers;
pub mod health;
pub mod ingest;
pub mod projects;
pub mod repos;
