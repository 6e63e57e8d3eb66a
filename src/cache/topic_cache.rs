//! Moka-backed cache of registry reads.
//!
//! Holds get-by-id results and list pages. Entries expire after the
//! configured TTL; [`CacheInvalidator::invalidate_all`] flushes everything
//! immediately.
//!
//! Every flush advances an epoch. A reader captures the epoch before it goes
//! to the registry and hands it back when filling the cache; the fill is
//! dropped if a flush happened in between, so a read that raced a delete
//! cannot resurrect the deleted topic.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tokio::sync::RwLock;

use super::{CacheInvalidator, InvalidationError};
use crate::domain::{Topic, TopicId};
use crate::persistence::Page;

/// Shared cache of topic reads.
#[derive(Debug, Clone)]
pub struct TopicReadCache {
    by_id: Cache<TopicId, Topic>,
    pages: Cache<Page, Arc<Vec<Topic>>>,
    epoch: Arc<RwLock<u64>>,
}

impl TopicReadCache {
    /// Creates a cache holding at most `max_entries` entries per kind, each
    /// living at most `ttl`.
    #[must_use]
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            by_id: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
            pages: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
            epoch: Arc::new(RwLock::new(0)),
        }
    }

    /// Cached topic for `id`, if any.
    pub async fn get(&self, id: TopicId) -> Option<Topic> {
        self.by_id.get(&id).await
    }

    /// Current flush epoch. Capture it before reading the registry.
    pub async fn epoch(&self) -> u64 {
        *self.epoch.read().await
    }

    /// Caches `topic` under its id unless the cache was flushed since
    /// `epoch`. Returns whether the entry was stored.
    pub async fn put(&self, topic: Topic, epoch: u64) -> bool {
        let current = self.epoch.read().await;
        if *current != epoch {
            return false;
        }
        self.by_id.insert(topic.id, topic).await;
        true
    }

    /// Cached listing for `page`, if any.
    pub async fn get_page(&self, page: Page) -> Option<Arc<Vec<Topic>>> {
        self.pages.get(&page).await
    }

    /// Caches the listing for `page` unless the cache was flushed since
    /// `epoch`. Returns whether the entry was stored.
    pub async fn put_page(&self, page: Page, topics: Arc<Vec<Topic>>, epoch: u64) -> bool {
        let current = self.epoch.read().await;
        if *current != epoch {
            return false;
        }
        self.pages.insert(page, topics).await;
        true
    }
}

#[async_trait]
impl CacheInvalidator for TopicReadCache {
    async fn invalidate_all(&self) -> Result<(), InvalidationError> {
        // Held across the flush so no fill can slip in between bump and clear.
        let mut epoch = self.epoch.write().await;
        *epoch = epoch.wrapping_add(1);
        self.by_id.invalidate_all();
        self.pages.invalidate_all();
        self.by_id.run_pending_tasks().await;
        self.pages.run_pending_tasks().await;
        tracing::debug!(epoch = *epoch, "topic read cache flushed");
        Ok(())
    }
}
