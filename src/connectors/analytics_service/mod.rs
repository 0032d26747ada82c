//! Analytics Service connector module
//!
//! `POST /chat` sends a question and returns the assistant's answer plus any
//! graph ids; `GET /graph/{id}` returns the rendered graph as image bytes.

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::config::AnalyticsServiceConfig;
use super::errors::ConnectorError;
use crate::models::GraphImage;

pub mod client;
#[cfg(test)]
pub mod mock;
mod types;

pub use client::AnalyticsServiceClient;
#[cfg(test)]
pub use mock::{MockAnalyticsServiceConnector, ScriptedReply};
pub use types::{ChatReply, ChatRequest, ChatResponse};

/// Trait for analytics service integration
/// Allows mocking in tests and swapping implementations
#[async_trait]
pub trait AnalyticsServiceConnector: Send + Sync {
    /// Send one chat message, round-tripping the session handle when known.
    /// Resolves with `ConnectorError::Cancelled` once `cancel` fires.
    async fn send_chat_message(
        &self,
        text: &str,
        session_handle: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ChatReply, ConnectorError>;

    /// Fetch the image for a graph id returned by `send_chat_message`.
    async fn fetch_graph_image(
        &self,
        graph_id: &str,
        cancel: &CancellationToken,
    ) -> Result<GraphImage, ConnectorError>;
}

/// Build the HTTP connector from configuration.
pub fn init(
    config: &AnalyticsServiceConfig,
) -> Result<Arc<dyn AnalyticsServiceConnector>, ConnectorError> {
    tracing::info!("Initializing analytics service connector: {}", config.base_url);
    let client = AnalyticsServiceClient::new(config.clone())?;
    Ok(Arc::new(client))
}
