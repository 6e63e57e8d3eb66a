//! Topic registry: the relational store of topic records.
//!
//! The registry is authoritative for name uniqueness and, from the
//! application's point of view, for topic existence. The concrete
//! implementation uses `sqlx::PgPool`; an in-memory implementation backs
//! tests and local development.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Topic, TopicId, TopicName};

pub use memory::InMemoryTopicRegistry;
pub use postgres::PostgresTopicRegistry;

/// Offset/limit window over the registry listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// Zero-based index of the first record.
    pub offset: u64,
    /// Maximum number of records returned.
    pub limit: u64,
}

impl Page {
    /// Default page size.
    pub const DEFAULT_LIMIT: u64 = 20;

    /// Largest accepted page size.
    pub const MAX_LIMIT: u64 = 100;

    /// Builds a page, clamping `limit` to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// Errors raised by a [`TopicRegistry`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Another record already holds this name.
    #[error("topic name already registered")]
    UniqueViolation,

    /// Other entities still reference the record.
    #[error("topic is still referenced by other records")]
    ReferenceViolation,

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation;
            }
            if db_err.is_foreign_key_violation() {
                return Self::ReferenceViolation;
            }
        }
        Self::Database(err.to_string())
    }
}

/// Relational store of topic records.
#[async_trait]
pub trait TopicRegistry: Send + Sync + std::fmt::Debug {
    /// Returns one page of topics ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Database`] on storage failure.
    async fn list(&self, page: Page) -> Result<Vec<Topic>, RegistryError>;

    /// Looks up a topic by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Database`] on storage failure.
    async fn get_by_id(&self, id: TopicId) -> Result<Option<Topic>, RegistryError>;

    /// Inserts a new record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UniqueViolation`] if the name is taken.
    async fn insert(&self, name: &TopicName) -> Result<Topic, RegistryError>;

    /// Deletes the record `id`, returning `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReferenceViolation`] if other records
    /// still reference the topic.
    async fn delete_by_id(&self, id: TopicId) -> Result<bool, RegistryError>;
}
