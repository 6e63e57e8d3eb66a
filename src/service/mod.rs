//! Service layer: the topic lifecycle coordinator.

mod classify;
pub mod topic_service;

pub use topic_service::TopicService;
