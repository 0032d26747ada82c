use std::fmt;

use crate::connectors::ConnectorError;
use crate::services::StoreError;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CliError: unified error hierarchy for all CLI operations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug)]
pub enum CliError {
    // Config errors
    ConfigLoadFailed { source: config::ConfigError },

    // Connector errors
    Connector(ConnectorError),

    // History errors
    ConversationIndexOutOfRange { index: usize, available: usize },
    Store(StoreError),

    // Runtime errors
    RuntimeUnavailable(String),

    // IO errors
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigLoadFailed { source } => {
                write!(f, "Failed to load configuration: {source}")
            }
            Self::Connector(err) => write!(f, "{err}"),
            Self::ConversationIndexOutOfRange { index, available } => {
                if *available == 0 {
                    write!(f, "No conversation #{index}: history is empty")
                } else {
                    write!(
                        f,
                        "No conversation #{index}. Choose a number between 1 and {available}"
                    )
                }
            }
            Self::Store(err) => write!(f, "{err}"),
            Self::RuntimeUnavailable(msg) => {
                write!(f, "Failed to create async runtime: {msg}")
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigLoadFailed { source: err }
    }
}

impl From<ConnectorError> for CliError {
    fn from(err: ConnectorError) -> Self {
        Self::Connector(err)
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
