//! External Service Connectors
//!
//! Adapters for talking to the remote analytics service. The orchestrator
//! only ever sees the [`AnalyticsServiceConnector`] trait, so tests can swap
//! the HTTP client for a scripted one.
//!
//! ## Architecture Pattern
//!
//! 1. Trait in `analytics_service/mod.rs` → allows mocking in tests
//! 2. HTTP client in `analytics_service/client.rs`
//! 3. Configuration in `config.rs`
//! 4. Errors in `errors.rs`, converted to chat messages by the orchestrator

pub mod analytics_service;
pub mod config;
pub mod errors;

pub use analytics_service::{
    init as init_analytics_service, AnalyticsServiceClient, AnalyticsServiceConnector, ChatReply,
};
pub use config::AnalyticsServiceConfig;
pub use errors::ConnectorError;
