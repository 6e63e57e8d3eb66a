//! Mapping of leaf errors onto [`ServiceError`] categories.
//!
//! Raw database and transport messages only surface for the opaque
//! categories; constraint violations become fixed, semantic messages.

use crate::cache::InvalidationError;
use crate::error::ServiceError;
use crate::persistence::RegistryError;
use crate::pubsub::PubSubError;

/// Any gateway failure is an upstream failure.
pub(crate) fn upstream(err: &PubSubError) -> ServiceError {
    ServiceError::Upstream(err.to_string())
}

/// Classifies a failed registry insert.
pub(crate) fn insert_failure(err: &RegistryError) -> ServiceError {
    match err {
        RegistryError::UniqueViolation => ServiceError::conflict("topic name already registered"),
        other => ServiceError::Internal(other.to_string()),
    }
}

/// Classifies a failed registry delete. The remote topic is already gone
/// when this runs, so a reference conflict carries a reconciliation note.
pub(crate) fn delete_failure(err: &RegistryError, remote: &str) -> ServiceError {
    match err {
        RegistryError::ReferenceViolation => ServiceError::Conflict {
            message: "topic is still referenced by other records".to_string(),
            details: Some(format!(
                "remote topic {remote} was already deleted; recreate it or remove the references \
                 and retry the delete"
            )),
        },
        other => ServiceError::Internal(other.to_string()),
    }
}

/// Any other registry failure, e.g. on lookups.
pub(crate) fn registry(err: &RegistryError) -> ServiceError {
    ServiceError::Internal(err.to_string())
}

pub(crate) fn invalidation(err: &InvalidationError) -> ServiceError {
    ServiceError::Internal(err.to_string())
}
