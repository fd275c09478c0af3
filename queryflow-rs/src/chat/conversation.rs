//! Conversation state owned by one chat session

use serde::{Deserialize, Serialize};

use crate::chat::engine::ChatEngine;
use crate::chat::types::{ChatMessage, ChatReply, ChatRole};
use crate::error::Result;

/// Ordered list of turns; messages are appended, never edited
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send one user turn and record both sides
    ///
    /// Blank input is ignored. On engine failure only the user turn stays
    /// recorded, so the caller can offer a retry.
    pub async fn ask(&mut self, engine: &dyn ChatEngine, text: &str) -> Result<Option<ChatReply>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let prior = self.messages.len();
        self.messages.push(ChatMessage::user(text));

        let reply = engine.send_message(text, &self.messages[..prior]).await?;
        self.messages.push(ChatMessage::assistant(&reply));
        Ok(Some(reply))
    }

    /// Most recent user turn, for resending
    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == ChatRole::User)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryFlowError;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Echoes the message and remembers history lengths
    struct EchoEngine {
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait::async_trait]
    impl ChatEngine for EchoEngine {
        async fn send_message(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply> {
            self.seen.lock().unwrap().push(history.len());
            Ok(ChatReply {
                content: format!("echo: {}", message),
                sources: Vec::new(),
                cached: false,
                timestamp: Utc::now(),
            })
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct DownEngine;

    #[async_trait::async_trait]
    impl ChatEngine for DownEngine {
        async fn send_message(&self, _message: &str, _history: &[ChatMessage]) -> Result<ChatReply> {
            Err(QueryFlowError::Transient("backend unavailable".to_string()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    #[tokio::test]
    async fn test_ask_records_both_turns() {
        let engine = EchoEngine {
            seen: Mutex::new(Vec::new()),
        };
        let mut conversation = Conversation::new();

        conversation.ask(&engine, "first").await.unwrap();
        let reply = conversation.ask(&engine, "second").await.unwrap().unwrap();

        assert_eq!(reply.content, "echo: second");
        assert_eq!(conversation.len(), 4);
        assert_eq!(conversation.messages()[3].role, ChatRole::Assistant);
        assert_eq!(*engine.seen.lock().unwrap(), vec![0, 2]);
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let engine = EchoEngine {
            seen: Mutex::new(Vec::new()),
        };
        let mut conversation = Conversation::new();

        assert!(conversation.ask(&engine, "   ").await.unwrap().is_none());
        assert!(conversation.is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_user_turn_for_retry() {
        let mut conversation = Conversation::new();

        let err = conversation.ask(&DownEngine, "hello").await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.last_user_message().unwrap().content, "hello");

        conversation.clear();
        assert!(conversation.last_user_message().is_none());
    }
}
