//! Chat module
//!
//! Keyword-matched canned replies, the engine trait they sit behind and the
//! conversation that records each turn.

pub mod conversation;
pub mod engine;
pub mod types;

pub use conversation::Conversation;
pub use engine::{ChatEngine, KeywordChat};
pub use types::*;
