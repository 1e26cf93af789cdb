//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized report payloads.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures should degrade to database
/// aggregation).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value for a key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are
    /// logged and treated as cache misses.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value under a key with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - The cache key
    /// - `value` - Serialized payload to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log
    /// errors and return `Ok(())` to avoid disrupting the request flow.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<usize>) -> CacheResult<()>;

    /// Removes a cached value.
    ///
    /// Used when underlying activity data changes during ingestion.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
