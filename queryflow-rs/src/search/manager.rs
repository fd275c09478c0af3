//! Search manager for mock document search

use std::sync::Arc;
use tracing::{debug, info};

use crate::assembler;
use crate::config::SearchConfig;
use crate::latency::Latency;
use crate::matcher;
use crate::random::RandomSource;
use crate::search::types::{ScoredDocument, SearchDocument};
use crate::store::RecordStore;

/// Substring search over the record store's documents
pub struct SearchManager {
    store: Arc<RecordStore>,
    config: SearchConfig,
    latency: Latency,
    random: Arc<dyn RandomSource>,
}

impl SearchManager {
    pub fn new(
        store: Arc<RecordStore>,
        config: SearchConfig,
        latency: Latency,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            store,
            config,
            latency,
            random,
        }
    }

    /// Matching documents, highest synthetic score first, at most `max_results`
    ///
    /// Never fails; no match gives an empty list.
    pub async fn search(&self, query: &str) -> Vec<ScoredDocument> {
        self.latency
            .simulate(self.latency.ranges().search, self.random.as_ref())
            .await;

        let matched = matcher::filter_documents(query, self.store.documents());
        let total = matched.len();
        let results = assembler::assemble_search(matched, &self.config, self.random.as_ref());

        info!(
            "Search for {:?}: {} matches, returning {}",
            query,
            total,
            results.len()
        );
        results
    }

    /// Fixture document by id, undecorated
    pub async fn get(&self, id: u64) -> Option<SearchDocument> {
        self.latency
            .simulate(self.latency.ranges().search_get, self.random.as_ref())
            .await;

        let document = self.store.document(id).cloned();
        debug!("Search document {} found: {}", id, document.is_some());
        document
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
