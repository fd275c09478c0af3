//! History entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::search::QueryMode;

/// A recorded search or chat submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub query: String,
    pub mode: QueryMode,
    /// Opaque result payload kept for display
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Record for HistoryEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Request to record a submission
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    pub query: String,
    pub mode: QueryMode,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl CreateHistoryRequest {
    pub fn new(query: impl Into<String>, mode: QueryMode) -> Self {
        Self {
            query: query.into(),
            mode,
            results: Vec::new(),
            user_id: None,
        }
    }

    pub fn with_results(mut self, results: Vec<serde_json::Value>) -> Self {
        self.results = results;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
