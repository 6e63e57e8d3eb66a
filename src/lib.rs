//! # topic-manager
//!
//! Administrative REST service for message topics that must exist in two
//! independent stores at once: the managed Pub/Sub service and a
//! PostgreSQL registry used for listing, pagination and foreign keys from
//! other entities.
//!
//! The interesting part is [`service::TopicService`], which keeps the two
//! stores consistent under partial failure with a fixed step order and a
//! single compensating action.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── TopicService (service/)
//!     │     ├── TopicGateway ──── Pub/Sub REST API (pubsub/)
//!     │     ├── TopicRegistry ─── PostgreSQL (persistence/)
//!     │     └── CacheInvalidator ─ TopicReadCache (cache/)
//! ```

pub mod api;
pub mod app_state;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod pubsub;
pub mod service;
