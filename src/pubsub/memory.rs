//! In-process topic gateway with failure injection.
//!
//! Used for local development (`PUBSUB_BACKEND=memory`) and to drive the
//! coordinator through every partial-failure path in tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CreateOutcome, PubSubError, TopicGateway};
use crate::domain::TopicName;

/// Gateway call that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    /// [`TopicGateway::exists`].
    Exists,
    /// [`TopicGateway::create`].
    Create,
    /// [`TopicGateway::delete`].
    Delete,
}

/// In-memory [`TopicGateway`].
#[derive(Debug, Default)]
pub struct InMemoryTopicGateway {
    topics: RwLock<HashSet<String>>,
    failing: RwLock<HashSet<GatewayOp>>,
    deletes: AtomicUsize,
}

impl InMemoryTopicGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call of `op` fail until [`Self::heal`].
    pub async fn fail_on(&self, op: GatewayOp) {
        self.failing.write().await.insert(op);
    }

    /// Clears all injected failures.
    pub async fn heal(&self) {
        self.failing.write().await.clear();
    }

    /// Returns whether a remote topic named `name` is present.
    pub async fn contains(&self, name: &str) -> bool {
        self.topics.read().await.contains(name)
    }

    /// Inserts a remote topic directly, bypassing failure injection.
    pub async fn seed(&self, name: &str) {
        self.topics.write().await.insert(name.to_string());
    }

    /// Number of remote topics.
    pub async fn len(&self) -> usize {
        self.topics.read().await.len()
    }

    /// Returns `true` when no remote topic exists.
    pub async fn is_empty(&self) -> bool {
        self.topics.read().await.is_empty()
    }

    /// Number of successful delete calls that removed a topic.
    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    async fn check(&self, op: GatewayOp) -> Result<(), PubSubError> {
        if self.failing.read().await.contains(&op) {
            return Err(PubSubError::Unavailable(format!("{op:?} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicGateway for InMemoryTopicGateway {
    async fn exists(&self, name: &TopicName) -> Result<bool, PubSubError> {
        self.check(GatewayOp::Exists).await?;
        Ok(self.topics.read().await.contains(name.as_str()))
    }

    async fn create(&self, name: &TopicName) -> Result<CreateOutcome, PubSubError> {
        self.check(GatewayOp::Create).await?;
        if self.topics.write().await.insert(name.to_string()) {
            Ok(CreateOutcome::Created)
        } else {
            Ok(CreateOutcome::AlreadyExists)
        }
    }

    async fn delete(&self, name: &TopicName) -> Result<bool, PubSubError> {
        self.check(GatewayOp::Delete).await?;
        let removed = self.topics.write().await.remove(name.as_str());
        if removed {
            self.deletes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }
}
