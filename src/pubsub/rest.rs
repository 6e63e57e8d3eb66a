//! Pub/Sub v1 REST implementation of [`TopicGateway`].
//!
//! Topics are addressed as
//! `{endpoint}/v1/projects/{project}/topics/{name}`. The same client works
//! against the Pub/Sub emulator when the endpoint points at it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::{CreateOutcome, PubSubError, TopicGateway};
use crate::domain::TopicName;

/// REST client for the managed Pub/Sub admin API.
#[derive(Debug, Clone)]
pub struct RestTopicGateway {
    client: Client,
    endpoint: String,
    project_id: String,
    access_token: Option<String>,
}

impl RestTopicGateway {
    /// Builds a gateway for `project_id` talking to `endpoint`.
    ///
    /// `timeout` bounds every request; the coordinator has no timeout of
    /// its own.
    ///
    /// # Errors
    ///
    /// Returns [`PubSubError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PubSubError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PubSubError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            access_token,
        })
    }

    /// Full resource URL of the remote topic `name`.
    #[must_use]
    pub fn topic_url(&self, name: &TopicName) -> String {
        // '%' is a legal topic character but must be escaped in a path.
        let segment = name.as_str().replace('%', "%25");
        format!(
            "{}/v1/projects/{}/topics/{}",
            self.endpoint, self.project_id, segment
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, PubSubError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| PubSubError::Transport(e.to_string()))
    }
}

async fn unexpected(response: Response) -> PubSubError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => status.canonical_reason().unwrap_or("unknown").to_string(),
    };
    PubSubError::Status {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl TopicGateway for RestTopicGateway {
    async fn exists(&self, name: &TopicName) -> Result<bool, PubSubError> {
        let response = self.send(self.client.get(self.topic_url(name))).await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }

    async fn create(&self, name: &TopicName) -> Result<CreateOutcome, PubSubError> {
        let request = self
            .client
            .put(self.topic_url(name))
            .json(&serde_json::json!({}));
        let response = self.send(request).await?;
        match response.status() {
            StatusCode::OK => {
                tracing::debug!(topic = %name, "remote topic created");
                Ok(CreateOutcome::Created)
            }
            StatusCode::CONFLICT => Ok(CreateOutcome::AlreadyExists),
            _ => Err(unexpected(response).await),
        }
    }

    async fn delete(&self, name: &TopicName) -> Result<bool, PubSubError> {
        let response = self.send(self.client.delete(self.topic_url(name))).await?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                tracing::debug!(topic = %name, "remote topic deleted");
                Ok(true)
            }
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }
}
