//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{CreateTopicRequest, PaginationMeta, TopicDto, TopicListResponse};
use crate::api::handlers::{system, topic};
use crate::error::{ErrorBody, ErrorResponse};

/// Aggregated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "topic-manager",
        description = "Administrative API keeping Pub/Sub topics and the topic registry consistent."
    ),
    paths(
        topic::create_topic,
        topic::list_topics,
        topic::get_topic,
        topic::delete_topic,
        system::health_handler,
    ),
    components(schemas(
        CreateTopicRequest,
        TopicDto,
        TopicListResponse,
        PaginationMeta,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Topics", description = "Topic lifecycle"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
