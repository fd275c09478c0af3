//! queryflow-rs: mock search/chat service layer
//!
//! The in-process services behind the QueryFlow UI. Every "backend" is a
//! filter over static fixtures with simulated latency and synthetic
//! metadata; there is no real search engine, AI backend or persistence.
//!
//! # Features
//!
//! - **Search**: case-insensitive substring match over document title and
//!   snippet, random score in [0.6, 1.0), top 10
//! - **Chat**: keyword-overlap template selection with randomized wording
//! - **Files**: upload validation (10MB, office/pdf types), list, delete
//! - **History**: recorded submissions with auto-incrementing ids
//! - **Settings**: one merged settings object with reset
//!
//! # Example
//!
//! ```no_run
//! use queryflow_rs::{QueryFlow, QueryFlowConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = QueryFlow::new(QueryFlowConfig::default())?;
//!
//!     for result in session.search.search("budget").await {
//!         println!("{:.2} {}", result.score, result.document.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`store`]: Fixture collections
//! - [`matcher`]: Keyword matching
//! - [`assembler`]: Scoring, ordering and reply wording
//! - [`collection`]: Id-issuing in-memory collections
//! - [`session`]: The object that owns every manager

pub mod assembler;
pub mod chat;
pub mod collection;
pub mod config;
pub mod error;
pub mod files;
pub mod history;
pub mod latency;
pub mod matcher;
pub mod random;
pub mod search;
pub mod session;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use config::QueryFlowConfig;
pub use error::{QueryFlowError, Result, UploadRejection};
pub use session::{QueryFlow, Submission};
