//! Search module
//!
//! Mock document search: substring filter plus synthetic scoring.

pub mod manager;
pub mod types;

pub use manager::SearchManager;
pub use types::*;
