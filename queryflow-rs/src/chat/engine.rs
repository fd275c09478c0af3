//! Chat engine abstraction and the keyword-matching mock

use std::sync::Arc;
use tracing::{debug, info};

use crate::assembler;
use crate::chat::types::{ChatMessage, ChatReply};
use crate::config::ChatConfig;
use crate::error::Result;
use crate::latency::Latency;
use crate::matcher;
use crate::random::RandomSource;
use crate::store::RecordStore;

/// Chat engine trait
#[async_trait::async_trait]
pub trait ChatEngine: Send + Sync {
    /// Reply to `message` given the prior conversation
    async fn send_message(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply>;

    /// Engine name
    fn name(&self) -> &str;
}

/// Mock engine answering from canned templates
///
/// Template selection is deterministic; only the wording variation and the
/// cached flag are random.
pub struct KeywordChat {
    name: String,
    store: Arc<RecordStore>,
    config: ChatConfig,
    latency: Latency,
    random: Arc<dyn RandomSource>,
}

impl KeywordChat {
    pub fn new(
        store: Arc<RecordStore>,
        config: ChatConfig,
        latency: Latency,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            name: "keyword-chat-v1".to_string(),
            store,
            config,
            latency,
            random,
        }
    }

    /// Reply without the trait's `Result` wrapper; this engine cannot fail
    pub async fn reply(&self, message: &str, history: &[ChatMessage]) -> ChatReply {
        self.latency
            .simulate(self.latency.ranges().chat, self.random.as_ref())
            .await;

        debug!("KeywordChat: {} prior messages", history.len());

        let templates = self.store.templates();
        let selected = matcher::select_template(message, templates);
        let template = templates
            .get(selected.index)
            .unwrap_or_else(|| self.store.default_template());

        info!(
            "Chat template {} selected (score {})",
            selected.index, selected.score
        );
        assembler::assemble_chat(template, &self.config, self.random.as_ref())
    }

    /// Lookup of a previously cached reply; no cache exists, always None
    pub async fn cached_response(&self, message_hash: &str) -> Option<ChatReply> {
        self.latency
            .simulate(self.latency.ranges().chat_cache, self.random.as_ref())
            .await;

        debug!("KeywordChat: cache lookup for {}", message_hash);
        None
    }
}

#[async_trait::async_trait]
impl ChatEngine for KeywordChat {
    async fn send_message(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply> {
        Ok(self.reply(message, history).await)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn engine(random: Arc<dyn RandomSource>) -> KeywordChat {
        KeywordChat::new(
            Arc::new(RecordStore::builtin().unwrap()),
            ChatConfig::default(),
            Latency::disabled(),
            random,
        )
    }

    #[tokio::test]
    async fn test_budget_question_uses_budget_template() {
        // variation 0 (verbatim), cached draw 0.0
        let chat = engine(Arc::new(SequenceRandom::new(vec![0.0, 0.0])));
        let store = RecordStore::builtin().unwrap();

        let reply = chat
            .send_message("what is our budget", &[])
            .await
            .unwrap();

        assert_eq!(reply.content, store.templates()[1].content);
        assert_eq!(reply.sources, store.templates()[1].sources);
        assert!(reply.cached);
    }

    #[tokio::test]
    async fn test_unmatched_message_uses_default() {
        let chat = engine(Arc::new(SequenceRandom::new(vec![0.0, 0.9])));
        let store = RecordStore::builtin().unwrap();

        let reply = chat.send_message("zzz qqq", &[]).await.unwrap();

        assert_eq!(reply.content, store.default_template().content);
        assert!(!reply.cached);
    }

    #[tokio::test]
    async fn test_variation_applied() {
        // 0.3 * 4 = 1.2 -> "Based on my analysis"
        let chat = engine(Arc::new(SequenceRandom::new(vec![0.3, 0.9])));

        let reply = chat.send_message("gdpr compliance", &[]).await.unwrap();
        assert!(reply.content.starts_with("Based on my analysis, personal data"));
    }

    #[tokio::test]
    async fn test_cached_response_is_none() {
        let chat = engine(Arc::new(SequenceRandom::new(vec![0.5])));
        assert!(chat.cached_response("abc123").await.is_none());
        assert_eq!(chat.name(), "keyword-chat-v1");
    }
}
