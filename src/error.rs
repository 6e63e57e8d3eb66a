//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the error type of the lifecycle coordinator and of
//! every REST handler. Each variant maps to a specific HTTP status code and
//! structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{TopicId, TopicName};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "message": "conflict: topic name already registered",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details, e.g. reconciliation hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category             | HTTP Status                  |
/// |-----------|----------------------|------------------------------|
/// | 1000–1999 | Validation           | 400 Bad Request              |
/// | 2000–2999 | Not Found / Conflict | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Upstream / Internal  | 502 Bad Gateway / 500        |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request rejected before touching any store.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Topic with the given id is not registered.
    #[error("topic not found: {0}")]
    NotFound(TopicId),

    /// Uniqueness or reference constraint violated.
    #[error("conflict: {message}")]
    Conflict {
        /// What conflicted.
        message: String,
        /// Operator-facing remediation note, if any.
        details: Option<String>,
    },

    /// The managed Pub/Sub service failed.
    #[error("pubsub upstream failure: {0}")]
    Upstream(String),

    /// A compensating remote delete failed; the remote topic leaked.
    #[error("compensation failed for topic {name}: {cause}; remote delete failed: {compensation}")]
    CompensationFailed {
        /// Remote topic left behind.
        name: TopicName,
        /// The failure that triggered the compensation.
        cause: String,
        /// Why the compensating delete failed.
        compensation: String,
    },

    /// Any other failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Shorthand for a [`ServiceError::Conflict`] without details.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            details: None,
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::NotFound(_) => 2001,
            Self::Conflict { .. } => 2002,
            Self::Internal(_) => 3000,
            Self::Upstream(_) => 3001,
            Self::CompensationFailed { .. } => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::CompensationFailed { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Conflict { details, .. } => details.clone(),
            Self::CompensationFailed { name, .. } => Some(format!(
                "remote topic {name} must be deleted manually"
            )),
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
