//! Chat orchestration
//!
//! Runs one exchange with the analytics service: optimistic user message,
//! chat call, bot reply, then each referenced graph in order. A new send
//! supersedes the one in flight. Every exchange captures a generation number
//! and only mutates state while that generation is still current, so a late
//! answer from a superseded call is dropped even if the network layer ignored
//! the cancellation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

use super::conversation_store::{ConversationStore, StoreError};
use crate::configuration::ConversationSettings;
use crate::connectors::{AnalyticsServiceConnector, ConnectorError};
use crate::models::Message;

/// How a call to [`ChatOrchestrator::send`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing happened
    Skipped,
    /// Bot reply and graph messages appended by this exchange, in order
    Completed { replies: Vec<Message> },
    /// The chat call failed; `reply` is the error message shown to the user
    Failed { error: ConnectorError, reply: Message },
    /// A newer exchange (or an explicit cancel) took over
    Superseded,
}

#[derive(Debug, Default)]
struct ChatState {
    store: ConversationStore,
    session_handle: Option<String>,
    pending: bool,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl ChatState {
    /// Invalidate the in-flight exchange, if any.
    fn supersede(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.generation += 1;
        self.pending = false;
    }
}

pub struct ChatOrchestrator {
    connector: Arc<dyn AnalyticsServiceConnector>,
    state: Mutex<ChatState>,
    settings: ConversationSettings,
}

impl ChatOrchestrator {
    pub fn new(connector: Arc<dyn AnalyticsServiceConnector>, settings: ConversationSettings) -> Self {
        let state = ChatState {
            store: ConversationStore::new(settings.title_max_chars),
            ..Default::default()
        };
        Self {
            connector,
            state: Mutex::new(state),
            settings,
        }
    }

    /// Resume an existing backend session.
    pub fn with_session_handle(self, handle: Option<String>) -> Self {
        self.lock_state().session_handle = handle.filter(|h| !h.is_empty());
        self
    }

    fn lock_state(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` only if `generation` is still the current exchange.
    fn apply_if_current<R>(
        &self,
        generation: u64,
        f: impl FnOnce(&mut ChatState) -> R,
    ) -> Option<R> {
        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(
                generation,
                current = state.generation,
                "Discarding result of superseded exchange"
            );
            return None;
        }
        Some(f(&mut state))
    }

    fn finish(&self, generation: u64) {
        self.apply_if_current(generation, |state| {
            state.pending = false;
            state.in_flight = None;
        });
    }

    #[tracing::instrument(name = "Chat exchange", skip(self, input), fields(generation = tracing::field::Empty))]
    pub async fn send(&self, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::Skipped;
        }

        let (generation, cancel, session_handle) = {
            let mut state = self.lock_state();
            state.store.append_message(Message::user_text(text));
            if state.in_flight.is_some() {
                tracing::info!("Superseding in-flight chat request");
            }
            state.supersede();
            let token = CancellationToken::new();
            state.in_flight = Some(token.clone());
            state.pending = true;
            (state.generation, token, state.session_handle.clone())
        };
        tracing::Span::current().record("generation", generation);

        let reply = match self
            .connector
            .send_chat_message(text, session_handle.as_deref(), &cancel)
            .await
        {
            Ok(reply) => reply,
            Err(ConnectorError::Cancelled) => return SendOutcome::Superseded,
            Err(error) => {
                let reply = Message::bot_text(format!("Failed to fetch response: {}", error));
                let applied = self.apply_if_current(generation, |state| {
                    state.store.append_message(reply.clone());
                    state.pending = false;
                    state.in_flight = None;
                });
                return match applied {
                    Some(()) => SendOutcome::Failed { error, reply },
                    None => SendOutcome::Superseded,
                };
            }
        };

        let text_reply = Message::bot_text(reply.reply_text.clone());
        let applied = self.apply_if_current(generation, |state| {
            if let Some(handle) = &reply.session_handle {
                state.session_handle = Some(handle.clone());
            }
            state.store.append_message(text_reply.clone());
        });
        if applied.is_none() {
            return SendOutcome::Superseded;
        }

        let mut replies = vec![text_reply];
        for graph_id in &reply.graph_references {
            let message = match self.connector.fetch_graph_image(graph_id, &cancel).await {
                Ok(image) => Message::bot_image(image, format!("Graph {}", graph_id)),
                Err(ConnectorError::Cancelled) => return SendOutcome::Superseded,
                Err(err) => {
                    tracing::warn!(graph_id = %graph_id, "Graph failed to load: {}", err);
                    Message::bot_text(format!("Failed to load graph {}", graph_id))
                }
            };
            let applied = self.apply_if_current(generation, |state| {
                state.store.append_message(message.clone());
            });
            if applied.is_none() {
                return SendOutcome::Superseded;
            }
            replies.push(message);
        }

        self.finish(generation);
        SendOutcome::Completed { replies }
    }

    /// Abandon the in-flight exchange, if any. Its result will be discarded.
    pub fn cancel_pending(&self) -> bool {
        let mut state = self.lock_state();
        let was_pending = state.pending;
        state.supersede();
        was_pending
    }

    /// Detach from the active conversation. The backend session is dropped
    /// unless `keep_session_on_new_chat` is set.
    pub fn new_chat(&self) {
        let mut state = self.lock_state();
        state.supersede();
        state.store.start_new();
        if !self.settings.keep_session_on_new_chat {
            state.session_handle = None;
        }
    }

    pub fn load_conversation(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.lock_state();
        state.store.load_conversation(id)?;
        state.supersede();
        Ok(())
    }

    pub fn delete_conversation(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.lock_state();
        let was_active = state.store.active_id() == Some(id);
        state.store.delete_conversation(id)?;
        if was_active {
            state.supersede();
        }
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.lock_state().pending
    }

    pub fn session_handle(&self) -> Option<String> {
        self.lock_state().session_handle.clone()
    }

    pub fn visible_messages(&self) -> Vec<Message> {
        self.lock_state().store.visible_messages().to_vec()
    }

    /// Read access to the conversation history.
    pub fn with_store<R>(&self, f: impl FnOnce(&ConversationStore) -> R) -> R {
        f(&self.lock_state().store)
    }
}
