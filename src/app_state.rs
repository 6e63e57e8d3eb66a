//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::TopicService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Topic lifecycle coordinator.
    pub topic_service: Arc<TopicService>,
}
