//! Topic record as stored in the registry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{TopicId, TopicName};

/// A topic known to the registry.
///
/// Only the coordinator creates or removes topics; the registry owns the
/// id and the timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Registry-assigned identifier (immutable).
    pub id: TopicId,

    /// Unique topic name, also the remote topic id (immutable).
    pub name: TopicName,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Row modification timestamp.
    pub updated_at: DateTime<Utc>,
}
