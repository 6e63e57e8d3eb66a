//! Database row models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::RegistryError;
use crate::domain::{Topic, TopicId, TopicName};

/// A row from the `topics` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TopicRow {
    /// Primary key.
    pub id: Uuid,
    /// Unique topic name.
    pub name: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TopicRow> for Topic {
    type Error = RegistryError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        let name = TopicName::parse(row.name)
            .map_err(|e| RegistryError::Database(format!("stored topic {}: {e}", row.id)))?;
        Ok(Self {
            id: TopicId::from_uuid(row.id),
            name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
