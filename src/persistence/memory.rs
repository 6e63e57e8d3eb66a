//! In-memory topic registry.
//!
//! Mirrors the constraints of the `topics` table: unique names and a
//! reference check standing in for foreign keys held by other tables.
//! Failures can be injected per operation.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Page, RegistryError, TopicRegistry};
use crate::domain::{Topic, TopicId, TopicName};

/// Registry call that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryOp {
    /// [`TopicRegistry::list`].
    List,
    /// [`TopicRegistry::get_by_id`].
    Get,
    /// [`TopicRegistry::insert`].
    Insert,
    /// [`TopicRegistry::delete_by_id`].
    Delete,
}

#[derive(Debug, Default)]
struct State {
    topics: Vec<Topic>,
    referenced: HashSet<TopicId>,
    failing: HashSet<RegistryOp>,
}

/// In-memory [`TopicRegistry`], ordered by insertion.
#[derive(Debug, Default)]
pub struct InMemoryTopicRegistry {
    state: RwLock<State>,
}

impl InMemoryTopicRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as referenced by another entity, blocking its deletion.
    pub async fn add_reference(&self, id: TopicId) {
        self.state.write().await.referenced.insert(id);
    }

    /// Drops the reference on `id`.
    pub async fn remove_reference(&self, id: TopicId) {
        self.state.write().await.referenced.remove(&id);
    }

    /// Makes every subsequent call of `op` fail with a database error.
    pub async fn fail_on(&self, op: RegistryOp) {
        self.state.write().await.failing.insert(op);
    }

    /// Clears all injected failures.
    pub async fn heal(&self) {
        self.state.write().await.failing.clear();
    }

    /// Number of records whose name equals `name`.
    pub async fn count_named(&self, name: &str) -> usize {
        self.state
            .read()
            .await
            .topics
            .iter()
            .filter(|t| t.name.as_str() == name)
            .count()
    }

    /// Returns `true` when the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.topics.is_empty()
    }
}

fn injected(state: &State, op: RegistryOp) -> Result<(), RegistryError> {
    if state.failing.contains(&op) {
        return Err(RegistryError::Database(format!("{op:?} failed")));
    }
    Ok(())
}

#[async_trait]
impl TopicRegistry for InMemoryTopicRegistry {
    async fn list(&self, page: Page) -> Result<Vec<Topic>, RegistryError> {
        let state = self.state.read().await;
        injected(&state, RegistryOp::List)?;
        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(state
            .topics
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: TopicId) -> Result<Option<Topic>, RegistryError> {
        let state = self.state.read().await;
        injected(&state, RegistryOp::Get)?;
        Ok(state.topics.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, name: &TopicName) -> Result<Topic, RegistryError> {
        let mut state = self.state.write().await;
        injected(&state, RegistryOp::Insert)?;
        if state.topics.iter().any(|t| &t.name == name) {
            return Err(RegistryError::UniqueViolation);
        }
        let now = Utc::now();
        let topic = Topic {
            id: TopicId::random(),
            name: name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.topics.push(topic.clone());
        Ok(topic)
    }

    async fn delete_by_id(&self, id: TopicId) -> Result<bool, RegistryError> {
        let mut state = self.state.write().await;
        injected(&state, RegistryOp::Delete)?;
        if state.referenced.contains(&id) {
            return Err(RegistryError::ReferenceViolation);
        }
        let before = state.topics.len();
        state.topics.retain(|t| t.id != id);
        Ok(state.topics.len() < before)
    }
}
