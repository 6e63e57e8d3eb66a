//! Domain layer: topic identity, validated names and the topic record.

pub mod topic;
pub mod topic_id;
pub mod topic_name;

pub use topic::Topic;
pub use topic_id::TopicId;
pub use topic_name::{TopicName, TopicNameError};
