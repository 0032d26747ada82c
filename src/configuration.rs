use serde;

use crate::connectors::AnalyticsServiceConfig;
use crate::models::DEFAULT_TITLE_MAX_CHARS;

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default)]
    pub analytics: AnalyticsServiceConfig,
    #[serde(default)]
    pub conversation: ConversationSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ConversationSettings {
    /// Conversation titles are cut to this many characters
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    /// Keep the backend session when starting a new chat
    #[serde(default)]
    pub keep_session_on_new_chat: bool,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            keep_session_on_new_chat: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analytics: AnalyticsServiceConfig::default(),
            conversation: ConversationSettings::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        // optional `configuration.{yaml,toml,json}` in the working directory
        .add_source(config::File::with_name("configuration").required(false))
        // e.g. GENIE__ANALYTICS__BASE_URL=http://10.0.0.5:8501
        .add_source(
            config::Environment::with_prefix("GENIE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
