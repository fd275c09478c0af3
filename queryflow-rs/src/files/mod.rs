//! Uploaded files
//!
//! Mock document uploads with size/type validation and canned text
//! extraction.

pub mod manager;
pub mod types;

pub use manager::FileManager;
pub use types::*;
