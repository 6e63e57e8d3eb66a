//! Topic DTOs for create, get and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::Topic;

/// Request body for `POST /topics`.
///
/// The name is kept as a plain string here so that validation failures
/// surface as structured 400 responses rather than body rejections.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    /// Topic name (5–256 characters, Pub/Sub naming rules).
    #[schema(example = "billing-events")]
    pub name: String,
}

/// External representation of a topic.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicDto {
    /// Registry identifier.
    pub id: uuid::Uuid,
    /// Topic name, also the remote Pub/Sub topic id.
    pub name: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Topic> for TopicDto {
    fn from(topic: &Topic) -> Self {
        Self {
            id: *topic.id.as_uuid(),
            name: topic.name.to_string(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

/// Paginated list response for `GET /topics`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicListResponse {
    /// Topics in registration order.
    pub data: Vec<TopicDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
