//! Application shell state
//!
//! Page routing, theme and user preferences. The chat state itself lives in
//! [`crate::services::ChatOrchestrator`]; this is everything around it.

pub mod demo_data;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    #[default]
    Chatbot,
    Reports,
    Settings,
    Profile,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RefreshInterval {
    #[serde(rename = "5min")]
    FiveMinutes,
    #[default]
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1hour")]
    OneHour,
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::OneHour => "1hour",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RefreshInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5min" => Ok(Self::FiveMinutes),
            "15min" => Ok(Self::FifteenMinutes),
            "30min" => Ok(Self::ThirtyMinutes),
            "1hour" => Ok(Self::OneHour),
            other => Err(format!(
                "Unknown refresh interval '{}'. Expected one of: 5min, 15min, 30min, 1hour",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub data_refresh_interval: RefreshInterval,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            data_refresh_interval: RefreshInterval::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub active_page: Page,
    pub sidebar_collapsed: bool,
    pub settings: UserSettings,
}

impl AppState {
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = ?self.active_page, to = ?page, "Navigate");
        self.active_page = page;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.settings.dark_mode
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.settings.notifications = !self.settings.notifications;
        self.settings.notifications
    }

    pub fn set_refresh_interval(&mut self, interval: RefreshInterval) {
        self.settings.data_refresh_interval = interval;
    }
}

/// "Just now", "3h ago", "Yesterday", or the calendar date.
pub fn format_updated_at(updated: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - updated).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        updated.format("%Y-%m-%d").to_string()
    }
}
