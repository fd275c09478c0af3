//! Session object owning every service
//!
//! Built once per process and passed by reference; nothing in the crate is a
//! global.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::chat::{ChatEngine, ChatMessage, ChatReply, KeywordChat};
use crate::config::QueryFlowConfig;
use crate::error::Result;
use crate::files::FileManager;
use crate::history::{CreateHistoryRequest, HistoryEntry, HistoryManager};
use crate::latency::Latency;
use crate::random::{RandomSource, SeededRandom};
use crate::search::{QueryMode, ScoredDocument, SearchManager};
use crate::settings::{Settings, SettingsManager};
use crate::store::{fixtures, RecordStore};

/// Result of a search-or-chat submission
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Submission {
    Search { results: Vec<ScoredDocument> },
    Chat { reply: ChatReply },
}

/// All managers behind one handle
pub struct QueryFlow {
    pub search: SearchManager,
    pub chat: Arc<KeywordChat>,
    pub files: FileManager,
    pub history: HistoryManager,
    pub settings: SettingsManager,
}

impl QueryFlow {
    /// Session over the built-in fixtures
    pub fn new(config: QueryFlowConfig) -> Result<Self> {
        let random: Arc<dyn RandomSource> = Arc::new(SeededRandom::new(config.random.seed));
        Self::with_parts(
            config,
            RecordStore::builtin()?,
            fixtures::history()?,
            fixtures::settings()?,
            random,
        )
    }

    /// Session over explicit fixtures and random source
    pub fn with_parts(
        config: QueryFlowConfig,
        store: RecordStore,
        history: Vec<HistoryEntry>,
        settings: Settings,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        config.validate()?;

        let latency = Latency::new(config.latency.clone());
        let store = Arc::new(store);

        let session = Self {
            search: SearchManager::new(
                Arc::clone(&store),
                config.search.clone(),
                latency.clone(),
                Arc::clone(&random),
            ),
            chat: Arc::new(KeywordChat::new(
                Arc::clone(&store),
                config.chat.clone(),
                latency.clone(),
                Arc::clone(&random),
            )),
            files: FileManager::new(
                store.files().to_vec(),
                config.upload.clone(),
                latency.clone(),
                Arc::clone(&random),
            ),
            history: HistoryManager::new(history, latency.clone(), Arc::clone(&random)),
            settings: SettingsManager::new(settings, latency, random),
        };

        info!(
            "QueryFlow session ready: {} documents, {} chat templates, {} files",
            store.documents().len(),
            store.templates().len(),
            store.files().len()
        );
        Ok(session)
    }

    /// Chat engine as a trait object
    pub fn chat_engine(&self) -> Arc<dyn ChatEngine> {
        self.chat.clone()
    }

    /// Run one submission and record it when auto-save is on
    pub async fn submit(
        &self,
        query: &str,
        mode: QueryMode,
        history: &[ChatMessage],
    ) -> Result<Submission> {
        let submission = match mode {
            QueryMode::Search => Submission::Search {
                results: self.search.search(query).await,
            },
            QueryMode::Chat => Submission::Chat {
                reply: self.chat.send_message(query, history).await?,
            },
        };

        if self.settings.get().await.auto_save {
            let results = match &submission {
                Submission::Search { results } => results
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<std::result::Result<Vec<_>, _>>()?,
                Submission::Chat { reply } => vec![serde_json::to_value(reply)?],
            };
            self.history
                .create(CreateHistoryRequest::new(query, mode).with_results(results))
                .await;
        } else {
            debug!("Auto-save disabled, {} submission not recorded", mode);
        }

        Ok(submission)
    }
}
