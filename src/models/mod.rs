mod conversation;
mod graph;
mod message;

pub use conversation::*;
pub use graph::*;
pub use message::*;
