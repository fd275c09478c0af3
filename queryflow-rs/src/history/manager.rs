//! History manager

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::collection::Collection;
use crate::error::{QueryFlowError, Result};
use crate::history::types::{CreateHistoryRequest, HistoryEntry};
use crate::latency::Latency;
use crate::random::RandomSource;
use crate::search::QueryMode;

/// Recorded submissions, newest first
pub struct HistoryManager {
    entries: Arc<RwLock<Collection<HistoryEntry>>>,
    latency: Latency,
    random: Arc<dyn RandomSource>,
}

impl HistoryManager {
    pub fn new(seed: Vec<HistoryEntry>, latency: Latency, random: Arc<dyn RandomSource>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Collection::from_records(seed))),
            latency,
            random,
        }
    }

    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.latency
            .simulate(self.latency.ranges().history_list, self.random.as_ref())
            .await;

        self.entries.read().await.list()
    }

    /// `list()` restricted to one mode
    pub async fn list_by_mode(&self, mode: QueryMode) -> Vec<HistoryEntry> {
        self.list()
            .await
            .into_iter()
            .filter(|entry| entry.mode == mode)
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<HistoryEntry> {
        self.latency
            .simulate(self.latency.ranges().history_get, self.random.as_ref())
            .await;

        self.entries.read().await.get(id)
    }

    pub async fn create(&self, request: CreateHistoryRequest) -> HistoryEntry {
        self.latency
            .simulate(self.latency.ranges().history_create, self.random.as_ref())
            .await;

        let mut entries = self.entries.write().await;
        let entry = entries.insert_with(|id| HistoryEntry {
            id,
            query: request.query,
            mode: request.mode,
            results: request.results,
            timestamp: Utc::now(),
            user_id: request.user_id,
        });

        info!("History entry {} recorded ({})", entry.id, entry.mode);
        entry
    }

    pub async fn delete(&self, id: u64) -> Result<bool> {
        self.latency
            .simulate(self.latency.ranges().history_delete, self.random.as_ref())
            .await;

        let mut entries = self.entries.write().await;
        if entries.remove(id).is_none() {
            return Err(QueryFlowError::NotFound(format!(
                "History item not found: {}",
                id
            )));
        }

        info!("History entry {} deleted", id);
        Ok(true)
    }

    /// Remove every entry; ids keep increasing afterwards
    pub async fn clear_all(&self) -> bool {
        self.latency
            .simulate(self.latency.ranges().history_clear, self.random.as_ref())
            .await;

        let removed = self.entries.write().await.clear();
        info!("History cleared ({} entries)", removed);
        true
    }
}
