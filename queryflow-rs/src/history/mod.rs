//! Search and chat history

pub mod manager;
pub mod types;

pub use manager::HistoryManager;
pub use types::*;
