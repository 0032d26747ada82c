pub mod conversation_store;
pub mod orchestrator;

pub use conversation_store::{ConversationStore, StoreError};
pub use orchestrator::{ChatOrchestrator, SendOutcome};
