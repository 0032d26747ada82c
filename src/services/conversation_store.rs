//! In-memory conversation history
//!
//! Holds every conversation of the process, the id of the active one, and the
//! visible message list the chat page shows. Nothing is persisted.

use crate::models::{Conversation, Message, DEFAULT_TITLE_MAX_CHARS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Conversation not found: {0}")]
    NotFound(String),
}

#[derive(Debug)]
pub struct ConversationStore {
    /// Most recently created first
    conversations: Vec<Conversation>,
    active_id: Option<String>,
    visible: Vec<Message>,
    title_max_chars: usize,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_MAX_CHARS)
    }
}

impl ConversationStore {
    pub fn new(title_max_chars: usize) -> Self {
        Self {
            conversations: Vec::new(),
            active_id: None,
            visible: Vec::new(),
            title_max_chars,
        }
    }

    /// Append to the active conversation, or start a new one (titled from
    /// this message) and make it active.
    pub fn append_message(&mut self, message: Message) {
        self.visible.push(message.clone());

        let active = self
            .active_id
            .as_deref()
            .and_then(|id| self.conversations.iter_mut().find(|c| c.id() == id));

        match active {
            Some(conversation) => conversation.push(message),
            None => {
                let conversation = Conversation::start(message, self.title_max_chars);
                tracing::debug!(
                    conversation_id = %conversation.id(),
                    title = %conversation.title(),
                    "Started new conversation"
                );
                self.active_id = Some(conversation.id().to_string());
                self.conversations.insert(0, conversation);
            }
        }
    }

    /// Show a stored conversation and make it the active one.
    pub fn load_conversation(&mut self, id: &str) -> Result<(), StoreError> {
        let conversation = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.visible = conversation.messages().to_vec();
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Remove a conversation. Deleting the active one clears the visible
    /// list and leaves no conversation active.
    pub fn delete_conversation(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .conversations
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.conversations.remove(index);

        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
            self.visible.clear();
        }
        Ok(())
    }

    /// Detach from the active conversation; the next message starts a new one.
    pub fn start_new(&mut self) {
        self.active_id = None;
        self.visible.clear();
    }

    pub fn search(&self, query: &str) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn visible_messages(&self) -> &[Message] {
        &self.visible
    }
}
