//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::persistence::Page;

/// Offset/limit query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Maximum number of items (1–100). Defaults to 20.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Zero-based index of the first item. Defaults to 0.
    #[serde(default)]
    pub offset: u64,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Offset the page starts at.
    pub offset: u64,
    /// Effective page size after clamping.
    pub limit: u64,
    /// Number of items in this page.
    pub count: usize,
}

fn default_limit() -> u64 {
    Page::DEFAULT_LIMIT
}

impl PaginationParams {
    /// Converts to a registry [`Page`], clamping `limit` to 1–100.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::new(self.offset, self.limit)
    }
}
