//! Terminal progress helpers: the "typing" spinner shown while the
//! analytics service is answering.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Braille dots.
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create an animated spinner with the given message.
///
/// Falls back to the default spinner style if the template is rejected.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars(TICK_CHARS)
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner shown while a chat request is pending.
pub fn typing_spinner(assistant: &str) -> ProgressBar {
    spinner(&format!("{} is typing...", assistant))
}

/// Stop the spinner and erase its line.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
