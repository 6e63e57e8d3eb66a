//! PostgreSQL implementation of the topic registry.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::TopicRow;
use super::{Page, RegistryError, TopicRegistry};
use crate::config::ServiceConfig;
use crate::domain::{Topic, TopicId, TopicName};

/// PostgreSQL-backed registry using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresTopicRegistry {
    pool: PgPool,
}

impl PostgresTopicRegistry {
    /// Creates a registry over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config` and, when enabled,
    /// applies the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Database`] if the database is unreachable
    /// or a migration fails.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, RegistryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;

        if config.database_run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| RegistryError::Database(e.to_string()))?;
            tracing::info!("database migrations applied");
        }

        Ok(Self::new(pool))
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl TopicRegistry for PostgresTopicRegistry {
    async fn list(&self, page: Page) -> Result<Vec<Topic>, RegistryError> {
        let rows = sqlx::query_as::<_, TopicRow>(
            "SELECT id, name, created_at, updated_at FROM topics \
             ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(to_i64(page.limit))
        .bind(to_i64(page.offset))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    async fn get_by_id(&self, id: TopicId) -> Result<Option<Topic>, RegistryError> {
        let row = sqlx::query_as::<_, TopicRow>(
            "SELECT id, name, created_at, updated_at FROM topics WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Topic::try_from).transpose()
    }

    async fn insert(&self, name: &TopicName) -> Result<Topic, RegistryError> {
        let row = sqlx::query_as::<_, TopicRow>(
            "INSERT INTO topics (id, name) VALUES ($1, $2) \
             RETURNING id, name, created_at, updated_at",
        )
        .bind(*TopicId::random().as_uuid())
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Topic::try_from(row)
    }

    async fn delete_by_id(&self, id: TopicId) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
