//! Result assembler
//!
//! Decorates matched records with synthetic metadata, orders and truncates
//! them. The scores and cached flags are display flavor only.

use chrono::Utc;

use crate::chat::{ChatReply, ChatTemplate};
use crate::config::{ChatConfig, SearchConfig};
use crate::random::RandomSource;
use crate::search::{ScoredDocument, SearchDocument};

/// Number of surface variations a chat reply is drawn from
pub const REPLY_VARIATIONS: usize = 4;

/// Score, flag, sort descending by score and truncate
///
/// The sort is stable, so equal scores keep the matcher's order.
pub fn assemble_search(
    matched: Vec<&SearchDocument>,
    config: &SearchConfig,
    random: &dyn RandomSource,
) -> Vec<ScoredDocument> {
    let timestamp = Utc::now();
    let mut scored: Vec<ScoredDocument> = matched
        .into_iter()
        .map(|document| ScoredDocument {
            document: document.clone(),
            score: random.range_f64(config.score_min, config.score_max),
            cached: random.chance(config.cached_probability),
            timestamp,
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(config.max_results);
    scored
}

/// Surface wording `variation` (0..4) of `content`
pub fn reply_variation(content: &str, variation: usize) -> String {
    match variation % REPLY_VARIATIONS {
        0 => content.to_string(),
        1 => format!("Based on my analysis, {}", content.to_lowercase()),
        2 => format!("Here's what I found: {}", content),
        _ => format!("Let me help you with that. {}", content),
    }
}

/// Reply built from the selected template
pub fn assemble_chat(
    template: &ChatTemplate,
    config: &ChatConfig,
    random: &dyn RandomSource,
) -> ChatReply {
    let variation = random.index(REPLY_VARIATIONS);
    ChatReply {
        content: reply_variation(&template.content, variation),
        sources: template.sources.clone(),
        cached: random.chance(config.cached_probability),
        timestamp: Utc::now(),
    }
}
