use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::types::{ChatReply, ChatRequest, ChatResponse};
use super::AnalyticsServiceConnector;
use crate::connectors::config::AnalyticsServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::GraphImage;

/// HTTP-based analytics service client
pub struct AnalyticsServiceClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AnalyticsServiceClient {
    pub fn new(config: AnalyticsServiceConfig) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn error_from_response(resp: reqwest::Response) -> ConnectorError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ConnectorError::remote(status, &body)
    }

    async fn post_chat(
        &self,
        text: &str,
        session_handle: Option<&str>,
    ) -> Result<ChatReply, ConnectorError> {
        let url = format!("{}/chat", self.base_url);
        let body = ChatRequest {
            message: text,
            session_id: session_handle,
        };

        let resp = self.http_client.post(&url).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        let text = resp.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| ConnectorError::InvalidResponse(format!("POST /chat: {}", e)))?;
        Ok(parsed.into())
    }

    async fn get_graph(&self, graph_id: &str) -> Result<GraphImage, ConnectorError> {
        let url = format!("{}/graph/{}", self.base_url, urlencoding::encode(graph_id));

        let resp = self.http_client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = resp.bytes().await?;
        Ok(GraphImage::new(graph_id, content_type, bytes.to_vec()))
    }
}

/// Race `fut` against `cancel`; cancellation wins ties.
async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, ConnectorError>
where
    F: Future<Output = Result<T, ConnectorError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ConnectorError::Cancelled),
        result = fut => result,
    }
}

#[async_trait]
impl AnalyticsServiceConnector for AnalyticsServiceClient {
    #[tracing::instrument(
        name = "Send chat message",
        skip(self, text, cancel),
        fields(chars = text.chars().count(), has_session = session_handle.is_some())
    )]
    async fn send_chat_message(
        &self,
        text: &str,
        session_handle: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ChatReply, ConnectorError> {
        let result = cancellable(cancel, self.post_chat(text, session_handle)).await;
        match &result {
            Ok(reply) => tracing::debug!(
                graphs = reply.graph_references.len(),
                query_type = ?reply.query_type,
                "Chat reply received"
            ),
            Err(ConnectorError::Cancelled) => tracing::debug!("Chat request cancelled"),
            Err(err) => tracing::warn!("Chat request failed: {}", err),
        }
        result
    }

    #[tracing::instrument(name = "Fetch graph image", skip(self, cancel))]
    async fn fetch_graph_image(
        &self,
        graph_id: &str,
        cancel: &CancellationToken,
    ) -> Result<GraphImage, ConnectorError> {
        let result = cancellable(cancel, self.get_graph(graph_id)).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                tracing::warn!("Graph fetch failed: {}", err);
            }
        }
        result
    }
}
