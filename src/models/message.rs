use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::GraphImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// What a message carries besides its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Image { image: GraphImage, caption: String },
}

/// A single chat entry. Fields are private: a message never changes after
/// it has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    content: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
    kind: MessageKind,
}

impl Message {
    fn build(sender: Sender, content: String, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            sender,
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn user_text(content: impl Into<String>) -> Self {
        Self::build(Sender::User, content.into(), MessageKind::Text)
    }

    pub fn bot_text(content: impl Into<String>) -> Self {
        Self::build(Sender::Bot, content.into(), MessageKind::Text)
    }

    pub fn bot_image(image: GraphImage, caption: impl Into<String>) -> Self {
        Self::build(
            Sender::Bot,
            String::new(),
            MessageKind::Image {
                image,
                caption: caption.into(),
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, MessageKind::Image { .. })
    }

    pub fn image(&self) -> Option<&GraphImage> {
        match &self.kind {
            MessageKind::Image { image, .. } => Some(image),
            MessageKind::Text => None,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Image { caption, .. } => Some(caption),
            MessageKind::Text => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user_text("hi");
        let b = Message::user_text("hi");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_text_message_has_no_image() {
        let msg = Message::bot_text("Recovery rate is 25.8%");
        assert_eq!(msg.sender(), Sender::Bot);
        assert_eq!(msg.content(), "Recovery rate is 25.8%");
        assert!(!msg.is_image());
        assert!(msg.image().is_none());
        assert!(msg.caption().is_none());
    }

    #[test]
    fn test_image_message_carries_handle_and_caption() {
        let image = GraphImage::new("g42", Some("image/png".to_string()), vec![1]);
        let msg = Message::bot_image(image.clone(), "Graph g42");
        assert!(msg.is_image());
        assert_eq!(msg.content(), "");
        assert_eq!(msg.image(), Some(&image));
        assert_eq!(msg.caption(), Some("Graph g42"));
    }

    #[test]
    fn test_sender_display_and_serde() {
        assert_eq!(Sender::User.to_string(), "user");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }
}
