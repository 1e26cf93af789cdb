//! Infrastructure layer: database and cache integrations.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`cache`] - Redis-backed caching with a no-op fallback

pub mod cache;
pub mod persistence;
