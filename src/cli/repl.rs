//! Line parsing for the interactive chat.

use crate::shell::RefreshInterval;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    New,
    History(Option<String>),
    Load(usize),
    Delete(usize),
    Session,
    ToggleDarkMode,
    ToggleNotifications,
    ToggleSidebar,
    Refresh(RefreshInterval),
    Preferences,
    Help,
    Quit,
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Message(String),
    Command(ReplCommand),
}

pub const HELP: &str = "\
Commands:
  /new              start a new conversation
  /history [QUERY]  list conversations, optionally filtered
  /load N           open conversation N from /history
  /delete N         delete conversation N from /history
  /session          show the current session id
  /theme            toggle dark mode
  /notifications    toggle notifications
  /sidebar          collapse or expand the sidebar
  /refresh INTERVAL data refresh interval (5min, 15min, 30min, 1hour)
  /prefs            show preferences
  /help             show this help
  /quit             exit
Anything else is sent to the analytics bot. Ctrl-C cancels a pending reply.";

pub fn parse_line(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return ReplInput::Message(line.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    let command = match name.as_str() {
        "new" => ReplCommand::New,
        "history" | "h" => ReplCommand::History(arg.map(str::to_string)),
        "load" => parse_index(arg, "load").map_or_else(ReplCommand::Invalid, ReplCommand::Load),
        "delete" | "del" => {
            parse_index(arg, "delete").map_or_else(ReplCommand::Invalid, ReplCommand::Delete)
        }
        "session" => ReplCommand::Session,
        "theme" | "dark" => ReplCommand::ToggleDarkMode,
        "notifications" => ReplCommand::ToggleNotifications,
        "sidebar" => ReplCommand::ToggleSidebar,
        "refresh" => match arg {
            Some(value) => value
                .parse::<RefreshInterval>()
                .map_or_else(ReplCommand::Invalid, ReplCommand::Refresh),
            None => ReplCommand::Invalid("Usage: /refresh 5min|15min|30min|1hour".to_string()),
        },
        "prefs" | "preferences" => ReplCommand::Preferences,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => ReplCommand::Invalid(format!("Unknown command '/{}'. Type /help", other)),
    };
    ReplInput::Command(command)
}

/// 1-based index as shown by `/history`.
fn parse_index(arg: Option<&str>, command: &str) -> Result<usize, String> {
    let usage = format!("Usage: /{} N (see /history)", command);
    let n: usize = arg.ok_or_else(|| usage.clone())?.parse().map_err(|_| usage.clone())?;
    if n == 0 {
        return Err(usage);
    }
    Ok(n)
}
