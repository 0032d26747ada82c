pub mod ask;
pub mod chat;
pub mod dashboard;
pub mod render;
pub mod settings;
pub mod suggestions;

use std::path::Path;

use crate::banner::ASSISTANT_NAME;
use crate::cli::error::CliError;
use crate::configuration::{get_configuration, Settings};
use crate::models::{Message, Sender};
use crate::render::{classify, terminal};

/// Every command runs on a single-threaded runtime.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::RuntimeUnavailable(e.to_string()))
}

/// Effective settings with the `--base-url` flag applied on top.
pub(crate) fn load_settings(base_url: Option<&str>) -> Result<Settings, CliError> {
    let mut settings = get_configuration()?;
    if let Some(url) = base_url {
        settings.analytics = settings.analytics.with_base_url(url);
    }
    Ok(settings)
}

/// Terminal text for one message body. Images are saved to `graph_dir`
/// when given, otherwise summarised.
pub(crate) fn render_body(message: &Message, graph_dir: Option<&Path>) -> Result<String, CliError> {
    let Some(image) = message.image() else {
        return Ok(terminal::format(&classify(message.content())));
    };
    let caption = message.caption().unwrap_or(image.graph_id());

    match graph_dir {
        Some(dir) => {
            let path = image.write_to(dir)?;
            tracing::debug!(graph_id = %image.graph_id(), path = %path.display(), "Graph saved");
            Ok(format!("[image: {} saved to {}]", caption, path.display()))
        }
        None => Ok(format!("[image: {} ({} bytes)]", caption, image.len())),
    }
}

/// Message with a speaker line, as shown in the interactive chat.
pub(crate) fn render_transcript_entry(
    message: &Message,
    graph_dir: Option<&Path>,
) -> Result<String, CliError> {
    let speaker = match message.sender() {
        Sender::User => "You",
        Sender::Bot => ASSISTANT_NAME,
    };
    Ok(format!("{}:\n{}\n", speaker, render_body(message, graph_dir)?))
}
