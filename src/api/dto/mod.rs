//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod topic_dto;

pub use common_dto::*;
pub use topic_dto::*;
