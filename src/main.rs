//! topic-manager server entry point.
//!
//! Wires the Pub/Sub gateway, the PostgreSQL registry and the read cache
//! into the lifecycle coordinator and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use topic_manager::api;
use topic_manager::app_state::AppState;
use topic_manager::cache::TopicReadCache;
use topic_manager::config::{LogFormat, PubSubBackend, ServiceConfig};
use topic_manager::persistence::PostgresTopicRegistry;
use topic_manager::pubsub::{InMemoryTopicGateway, RestTopicGateway, TopicGateway};
use topic_manager::service::TopicService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, backend = ?config.pubsub_backend, "starting topic-manager");

    // Build collaborators
    let gateway: Arc<dyn TopicGateway> = match config.pubsub_backend {
        PubSubBackend::Rest => {
            let project_id = config
                .gcp_project_id
                .clone()
                .ok_or_else(|| anyhow::anyhow!("GCP_PROJECT_ID must be set"))?;
            Arc::new(RestTopicGateway::new(
                config.pubsub_endpoint.clone(),
                project_id,
                config.pubsub_access_token.clone(),
                Duration::from_secs(config.pubsub_request_timeout_secs),
            )?)
        }
        PubSubBackend::Memory => {
            tracing::warn!("using in-memory pubsub backend; remote topics are not persisted");
            Arc::new(InMemoryTopicGateway::new())
        }
    };
    let registry = Arc::new(PostgresTopicRegistry::connect(&config).await?);
    let cache = TopicReadCache::new(
        config.cache_max_entries,
        Duration::from_secs(config.cache_ttl_secs),
    );

    // Build service layer
    let topic_service = Arc::new(TopicService::new(gateway, registry, cache));

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { topic_service });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
