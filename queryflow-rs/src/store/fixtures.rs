//! Built-in JSON fixtures

use serde::de::DeserializeOwned;

use crate::chat::ChatTemplate;
use crate::error::{QueryFlowError, Result};
use crate::files::FileRecord;
use crate::history::HistoryEntry;
use crate::search::SearchDocument;
use crate::settings::Settings;

pub const SEARCH_RESULTS_JSON: &str = include_str!("../../fixtures/search_results.json");
pub const CHAT_RESPONSES_JSON: &str = include_str!("../../fixtures/chat_responses.json");
pub const FILES_JSON: &str = include_str!("../../fixtures/files.json");
pub const HISTORY_JSON: &str = include_str!("../../fixtures/history.json");
pub const SETTINGS_JSON: &str = include_str!("../../fixtures/settings.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| QueryFlowError::Fixture(format!("Failed to parse {}: {}", name, e)))
}

pub fn search_documents() -> Result<Vec<SearchDocument>> {
    parse("search_results.json", SEARCH_RESULTS_JSON)
}

pub fn chat_templates() -> Result<Vec<ChatTemplate>> {
    parse("chat_responses.json", CHAT_RESPONSES_JSON)
}

pub fn files() -> Result<Vec<FileRecord>> {
    parse("files.json", FILES_JSON)
}

pub fn history() -> Result<Vec<HistoryEntry>> {
    parse("history.json", HISTORY_JSON)
}

pub fn settings() -> Result<Settings> {
    parse("settings.json", SETTINGS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixtures_parse() {
        assert!(!search_documents().unwrap().is_empty());
        assert!(!chat_templates().unwrap().is_empty());
        assert!(!files().unwrap().is_empty());
        assert!(!history().unwrap().is_empty());
        assert_eq!(settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_search_fixture_ids_unique() {
        let docs = search_documents().unwrap();
        let mut ids: Vec<u64> = docs.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn test_parse_error_names_fixture() {
        let err = parse::<Settings>("settings.json", "{").unwrap_err();
        assert!(err.to_string().contains("settings.json"));
    }
}
