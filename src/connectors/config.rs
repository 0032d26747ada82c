use serde::{Deserialize, Serialize};

/// Analytics service connector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsServiceConfig {
    /// Base URL of the analytics API (e.g., http://localhost:8501)
    #[serde(default = "AnalyticsServiceConfig::default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "AnalyticsServiceConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AnalyticsServiceConfig {
    fn default_base_url() -> String {
        "http://localhost:8501".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for AnalyticsServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}
