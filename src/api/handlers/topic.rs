//! Topic CRUD handlers: create, list, get, delete.
//!
//! Handlers own request binding and name validation; everything else is
//! delegated to [`crate::service::TopicService`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateTopicRequest, PaginationMeta, PaginationParams, TopicDto, TopicListResponse,
};
use crate::app_state::AppState;
use crate::domain::{TopicId, TopicName};
use crate::error::{ErrorResponse, ServiceError};

fn bad_input(message: String) -> ServiceError {
    ServiceError::Validation(message)
}

/// `POST /topics` — Create a topic in Pub/Sub and register it.
///
/// # Errors
///
/// Returns [`ServiceError`] on invalid names, duplicate names, or
/// upstream/registry failures.
#[utoipa::path(
    post,
    path = "/api/v1/topics",
    tag = "Topics",
    summary = "Create a topic",
    description = "Creates the remote Pub/Sub topic (unless it already exists) and then registers it. A failed registration deletes the remote topic created by this request.",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicDto),
        (status = 400, description = "Invalid topic name", body = ErrorResponse),
        (status = 409, description = "Name already registered", body = ErrorResponse),
        (status = 500, description = "Registry failure or failed compensation", body = ErrorResponse),
        (status = 502, description = "Pub/Sub failure", body = ErrorResponse),
    )
)]
pub async fn create_topic(
    State(state): State<AppState>,
    body: Result<Json<CreateTopicRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = body.map_err(|e| bad_input(e.body_text()))?;
    let name = TopicName::parse(req.name).map_err(|e| bad_input(e.to_string()))?;

    let topic = state.topic_service.create_topic(&name).await?;

    Ok((StatusCode::CREATED, Json(TopicDto::from(&topic))))
}

/// `GET /topics` — List registered topics.
///
/// # Errors
///
/// Returns [`ServiceError`] on malformed query parameters or registry
/// failure.
#[utoipa::path(
    get,
    path = "/api/v1/topics",
    tag = "Topics",
    summary = "List topics",
    description = "Returns a page of registered topics in registration order.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of topics", body = TopicListResponse),
        (status = 400, description = "Malformed pagination", body = ErrorResponse),
    )
)]
pub async fn list_topics(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Query(params) = params.map_err(|e| bad_input(e.body_text()))?;
    let page = params.page();

    let topics = state.topic_service.list_topics(page).await?;
    let data: Vec<TopicDto> = topics.iter().map(TopicDto::from).collect();

    Ok(Json(TopicListResponse {
        pagination: PaginationMeta {
            offset: page.offset,
            limit: page.limit,
            count: data.len(),
        },
        data,
    }))
}

/// `GET /topics/:id` — Get a topic.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] if the topic is not registered.
#[utoipa::path(
    get,
    path = "/api/v1/topics/{id}",
    tag = "Topics",
    summary = "Get a topic",
    params(
        ("id" = uuid::Uuid, Path, description = "Topic UUID"),
    ),
    responses(
        (status = 200, description = "Topic", body = TopicDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
    )
)]
pub async fn get_topic(
    State(state): State<AppState>,
    id: Result<Path<uuid::Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id.map_err(|e| bad_input(e.body_text()))?;
    let topic = state
        .topic_service
        .get_topic(TopicId::from_uuid(id))
        .await?;
    Ok(Json(TopicDto::from(&topic)))
}

/// `DELETE /topics/:id` — Delete a topic from Pub/Sub and the registry.
///
/// # Errors
///
/// Returns [`ServiceError`] if the topic is missing, still referenced, or
/// a store fails.
#[utoipa::path(
    delete,
    path = "/api/v1/topics/{id}",
    tag = "Topics",
    summary = "Delete a topic",
    description = "Deletes the remote Pub/Sub topic, then the registry record, then flushes the read cache. A 409 means the remote topic is already gone while the record is still referenced.",
    params(
        ("id" = uuid::Uuid, Path, description = "Topic UUID"),
    ),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 409, description = "Topic still referenced", body = ErrorResponse),
        (status = 500, description = "Registry or cache invalidation failure", body = ErrorResponse),
        (status = 502, description = "Pub/Sub failure", body = ErrorResponse),
    )
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    id: Result<Path<uuid::Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id.map_err(|e| bad_input(e.body_text()))?;
    state
        .topic_service
        .delete_topic(TopicId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Topic management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/topics", post(create_topic).get(list_topics))
        .route("/topics/{id}", get(get_topic).delete(delete_topic))
}
