//! Keyword matcher
//!
//! Substring filtering for search mode and keyword-overlap template
//! selection for chat mode. There is no tokenizer beyond whitespace and no
//! stemming.

use crate::chat::ChatTemplate;
use crate::search::SearchDocument;

/// True when `query` occurs in the title or snippet, ignoring case
pub fn matches_document(query: &str, document: &SearchDocument) -> bool {
    let needle = query.to_lowercase();
    document.title.to_lowercase().contains(&needle)
        || document.snippet.to_lowercase().contains(&needle)
}

/// Matching documents in store order
pub fn filter_documents<'a>(
    query: &str,
    documents: &'a [SearchDocument],
) -> Vec<&'a SearchDocument> {
    documents
        .iter()
        .filter(|doc| matches_document(query, doc))
        .collect()
}

/// Lower-cased whitespace tokens
pub fn tokenize(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of tokens that contain, or are contained in, some keyword
pub fn score_template(tokens: &[String], template: &ChatTemplate) -> usize {
    let keywords: Vec<String> = template.keywords.iter().map(|k| k.to_lowercase()).collect();
    tokens
        .iter()
        .filter(|token| {
            keywords
                .iter()
                .any(|keyword| keyword.contains(token.as_str()) || token.contains(keyword.as_str()))
        })
        .count()
}

/// Outcome of chat template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMatch {
    /// Index into the template list
    pub index: usize,
    /// Winning keyword score; 0 means the default template was used
    pub score: usize,
}

/// Pick the highest-scoring template
///
/// Ties go to the earliest template; with no positive score the first
/// template wins. `templates` must be non-empty.
pub fn select_template(message: &str, templates: &[ChatTemplate]) -> TemplateMatch {
    let tokens = tokenize(message);
    let mut best = TemplateMatch { index: 0, score: 0 };

    for (index, template) in templates.iter().enumerate() {
        let score = score_template(&tokens, template);
        if score > best.score {
            best = TemplateMatch { index, score };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DocumentSource;

    fn doc(id: u64, title: &str, snippet: &str) -> SearchDocument {
        SearchDocument {
            id,
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: None,
            source: DocumentSource::Web,
        }
    }

    fn template(keywords: &[&str], content: &str) -> ChatTemplate {
        ChatTemplate {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            content: content.to_string(),
            sources: Vec::new(),
        }
    }

    #[test]
    fn test_matches_title_or_snippet_case_insensitive() {
        let report = doc(1, "2024 Budget Report", "Annual numbers");
        assert!(matches_document("budget", &report));
        assert!(matches_document("ANNUAL", &report));
        assert!(!matches_document("forecast", &report));
    }

    #[test]
    fn test_query_is_not_tokenized() {
        let report = doc(1, "2024 Budget Report", "Annual numbers");
        assert!(!matches_document("budget numbers", &report));
        assert!(matches_document("budget report", &report));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let docs = vec![doc(1, "a", "b"), doc(2, "c", "d")];
        assert_eq!(filter_documents("", &docs).len(), 2);
    }

    #[test]
    fn test_filter_keeps_store_order() {
        let docs = vec![
            doc(1, "Budget", ""),
            doc(2, "Other", ""),
            doc(3, "", "budget cycle"),
        ];
        let ids: Vec<u64> = filter_documents("budget", &docs).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  Hello   World\t"), vec!["hello", "world"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_score_counts_either_direction() {
        let t = template(&["budget", "ai"], "");
        // "budgets" contains "budget"; "bud" is contained in "budget"
        let tokens = tokenize("budgets bud weather");
        assert_eq!(score_template(&tokens, &t), 2);
    }

    #[test]
    fn test_keywords_compared_lowercase() {
        let t = template(&["GDPR"], "");
        assert_eq!(score_template(&tokenize("gdpr rules"), &t), 1);
    }

    #[test]
    fn test_select_highest() {
        let templates = vec![
            template(&["hello"], "default"),
            template(&["budget"], "money"),
            template(&["budget", "report"], "report"),
        ];
        let selected = select_template("budget report please", &templates);
        assert_eq!(selected, TemplateMatch { index: 2, score: 2 });
    }

    #[test]
    fn test_select_tie_goes_to_first() {
        let templates = vec![
            template(&["hello"], "default"),
            template(&["budget"], "first"),
            template(&["budget"], "second"),
        ];
        assert_eq!(select_template("budget", &templates).index, 1);
    }

    #[test]
    fn test_select_defaults_to_first() {
        let templates = vec![template(&["hello"], "default"), template(&["budget"], "money")];
        assert_eq!(
            select_template("zzz", &templates),
            TemplateMatch { index: 0, score: 0 }
        );
        assert_eq!(select_template("", &templates).index, 0);
    }
}
