//! Remote topic gateway: the capability contract of the managed Pub/Sub
//! service.
//!
//! The coordinator only needs three calls: an existence check, creation
//! and deletion. Each call is safe to repeat: creating an existing topic
//! reports [`CreateOutcome::AlreadyExists`] and deleting a missing topic
//! reports `false` instead of failing.

pub mod memory;
pub mod rest;

use async_trait::async_trait;

use crate::domain::TopicName;

pub use memory::InMemoryTopicGateway;
pub use rest::RestTopicGateway;

/// Result of a create call on the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The remote topic was created by this call.
    Created,
    /// A remote topic with the same name already existed.
    AlreadyExists,
}

/// Errors raised by a [`TopicGateway`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum PubSubError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("pubsub transport error: {0}")]
    Transport(String),

    /// The service answered with an unexpected status.
    #[error("pubsub returned status {status}: {message}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body or status reason.
        message: String,
    },

    /// Failure injected by the in-memory gateway.
    #[error("pubsub unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface to the managed Pub/Sub service.
#[async_trait]
pub trait TopicGateway: Send + Sync + std::fmt::Debug {
    /// Returns whether a remote topic named `name` exists.
    ///
    /// # Errors
    ///
    /// Returns a [`PubSubError`] when the service cannot be queried.
    async fn exists(&self, name: &TopicName) -> Result<bool, PubSubError>;

    /// Creates the remote topic `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`PubSubError`] when the service rejects the request.
    async fn create(&self, name: &TopicName) -> Result<CreateOutcome, PubSubError>;

    /// Deletes the remote topic `name`, returning `false` if it was absent.
    ///
    /// # Errors
    ///
    /// Returns a [`PubSubError`] when the service rejects the request.
    async fn delete(&self, name: &TopicName) -> Result<bool, PubSubError>;
}
