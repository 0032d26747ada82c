use serde::Serialize;

use crate::configuration::Settings;
use crate::console::commands::cli::load_settings;
use crate::console::commands::CallableTrait;
use crate::shell::{AppState, UserSettings};

/// `genie settings show [--json]`
///
/// Prints the configuration after file, environment and flag overrides,
/// plus the default user preferences.
pub struct SettingsShowCommand {
    pub json: bool,
    pub base_url: Option<String>,
}

impl SettingsShowCommand {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }
}

#[derive(Debug, Serialize)]
struct EffectiveSettings<'a> {
    #[serde(flatten)]
    settings: &'a Settings,
    preferences: &'a UserSettings,
}

fn settings_text(settings: &Settings, preferences: &UserSettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("analytics.base_url                    {}\n", settings.analytics.base_url));
    out.push_str(&format!("analytics.timeout_secs                {}\n", settings.analytics.timeout_secs));
    out.push_str(&format!(
        "conversation.title_max_chars          {}\n",
        settings.conversation.title_max_chars
    ));
    out.push_str(&format!(
        "conversation.keep_session_on_new_chat {}\n",
        settings.conversation.keep_session_on_new_chat
    ));
    out.push_str(&format!("log_level                             {}\n", settings.log_level));
    out.push_str(&format!("preferences.dark_mode                 {}\n", preferences.dark_mode));
    out.push_str(&format!("preferences.notifications             {}\n", preferences.notifications));
    out.push_str(&format!(
        "preferences.data_refresh_interval     {}",
        preferences.data_refresh_interval
    ));
    out
}

impl CallableTrait for SettingsShowCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = load_settings(self.base_url.as_deref())?;
        let app = AppState::default();

        if self.json {
            let effective = EffectiveSettings {
                settings: &settings,
                preferences: &app.settings,
            };
            println!("{}", serde_json::to_string_pretty(&effective)?);
        } else {
            println!("{}", settings_text(&settings, &app.settings));
        }
        Ok(())
    }
}
