//! Settings store

pub mod manager;
pub mod types;

pub use manager::SettingsManager;
pub use types::*;
