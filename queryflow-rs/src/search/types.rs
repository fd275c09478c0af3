//! Search types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a search document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Web,
    Ai,
    User,
}

/// A searchable fixture document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub id: u64,
    pub title: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub source: DocumentSource,
}

/// A document decorated for one query
///
/// `score`, `cached` and `timestamp` are assigned per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: SearchDocument,
    /// Synthetic relevance in `[0, 1)`
    pub score: f64,
    /// Display flag only, no cache exists
    pub cached: bool,
    pub timestamp: DateTime<Utc>,
}

/// Which matcher/assembler path a submission runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Search,
    Chat,
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryMode::Search => write!(f, "search"),
            QueryMode::Chat => write!(f, "chat"),
        }
    }
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "search" => Ok(QueryMode::Search),
            "chat" => Ok(QueryMode::Chat),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}
