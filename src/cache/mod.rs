//! Read cache and the invalidation signal consumed after registry changes.
//!
//! The coordinator only sees [`CacheInvalidator`]. The scope of the signal
//! is deliberately coarse: every structural change flushes the whole
//! cache, not just the entries of the affected topic.

pub mod topic_cache;

use async_trait::async_trait;

pub use topic_cache::TopicReadCache;

/// Failure to deliver the invalidation signal.
#[derive(Debug, thiserror::Error)]
#[error("cache invalidation failed: {0}")]
pub struct InvalidationError(pub String);

/// Consumer of the "cached reads may be stale" signal.
#[async_trait]
pub trait CacheInvalidator: Send + Sync + std::fmt::Debug {
    /// Flushes every cached read result.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidationError`] if the flush could not complete.
    async fn invalidate_all(&self) -> Result<(), InvalidationError>;
}
