//! Keyword extraction from free text.
//!
//! The `KeywordMatcher` reports which entries of a fixed vocabulary occur in
//! a text. Matching is plain, case-sensitive substring containment: there
//! is no tokenization and no word-boundary check, so a keyword embedded in
//! a longer word still matches.

use std::collections::HashSet;

use tracing::debug;

/// Finds recognised keywords in text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// Recognised keywords, duplicates removed, in reporting order.
    vocabulary: Vec<String>,
}

impl KeywordMatcher {
    /// Create a matcher over the given vocabulary.
    ///
    /// Empty entries and repeated entries are dropped; the first occurrence
    /// fixes the position of a keyword in results.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let vocabulary = vocabulary
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.is_empty() && seen.insert(k.clone()))
            .collect();
        Self { vocabulary }
    }

    /// The recognised vocabulary.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Add a keyword at the end of the vocabulary.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if !keyword.is_empty() && !self.vocabulary.contains(&keyword) {
            self.vocabulary.push(keyword);
        }
    }

    /// Keywords occurring in `text`, in vocabulary order, each at most once.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let found: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .cloned()
            .collect();

        debug!("Matched {} keywords in text", found.len());
        found
    }

    /// Whether `keyword` is recognised and occurs in `text`.
    pub fn matches(&self, text: &str, keyword: &str) -> bool {
        self.vocabulary.iter().any(|k| k == keyword) && text.contains(keyword)
    }
}
