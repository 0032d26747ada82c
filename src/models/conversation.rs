use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Message;

pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;

/// A titled, append-only log of messages.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: String,
    title: String,
    messages: Vec<Message>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Start a conversation from its first message. The title is taken from
    /// that message's content.
    pub fn start(first: Message, title_max_chars: usize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: derive_title(first.content(), title_max_chars),
            messages: vec![first],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Case-insensitive match against the title or any message content.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .messages
                .iter()
                .any(|m| m.content().to_lowercase().contains(&needle))
    }
}

/// First `max_chars` characters of `content`, with `...` when cut.
pub fn derive_title(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let head: String = content.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_kept_verbatim() {
        assert_eq!(derive_title("Show monthly trends", 50), "Show monthly trends");
    }

    #[test]
    fn test_exactly_limit_not_truncated() {
        let content = "a".repeat(50);
        assert_eq!(derive_title(&content, 50), content);
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let content = "b".repeat(51);
        let title = derive_title(&content, 50);
        assert_eq!(title, format!("{}...", "b".repeat(50)));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let content = "₹".repeat(60);
        let title = derive_title(&content, 50);
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn test_push_bumps_updated_at() {
        let mut conv = Conversation::start(Message::user_text("hello"), 50);
        let before = conv.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(2));
        conv.push(Message::bot_text("hi there"));
        assert!(conv.updated_at() > before);
        assert_eq!(conv.created_at(), before);
        assert_eq!(conv.messages().len(), 2);
    }

    #[test]
    fn test_matches_title_or_content() {
        let mut conv = Conversation::start(Message::user_text("Regional performance"), 50);
        conv.push(Message::bot_text("Gujarat leads at 45.2%"));
        assert!(conv.matches("REGIONAL"));
        assert!(conv.matches("gujarat"));
        assert!(!conv.matches("kerala"));
    }
}
