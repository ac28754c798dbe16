//! Lexical items: the nodes of the graph.
//!
//! A lexical item is a word or phrase together with the difficulty tier it
//! belongs to. Difficulty runs from [`MIN_DIFFICULTY`] (easiest) upwards;
//! the hardest tier the system uses is [`MAX_DIFFICULTY`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Difficulty tier of a lexical item (1 = easiest).
pub type Difficulty = u32;

/// Easiest difficulty tier.
pub const MIN_DIFFICULTY: Difficulty = 1;

/// Hardest difficulty tier used by the default data set.
pub const MAX_DIFFICULTY: Difficulty = 3;

/// A word or phrase with an associated difficulty tier and definition.
///
/// Examples: "조사단장" (difficulty 3), "조사팀 책임자" (difficulty 2)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexicalItem {
    /// Unique identifier within a graph.
    pub id: String,

    /// Surface form matched against input text.
    pub label: String,

    /// Part-of-speech tag (e.g. "명사", "명사구", "부사").
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,

    /// Difficulty tier.
    pub difficulty: Difficulty,

    /// Subject domains this item belongs to.
    #[serde(rename = "domain", default)]
    pub domains: BTreeSet<String>,

    /// Short definition.
    #[serde(default)]
    pub gloss: String,
}

impl LexicalItem {
    /// Create a new item with empty part of speech, domains and gloss.
    pub fn new(id: impl Into<String>, label: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            part_of_speech: String::new(),
            difficulty,
            domains: BTreeSet::new(),
            gloss: String::new(),
        }
    }

    /// Set the part-of-speech tag.
    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = pos.into();
        self
    }

    /// Add a domain tag.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.insert(domain.into());
        self
    }

    /// Set the gloss.
    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = gloss.into();
        self
    }

    /// Whether this item belongs to the given domain.
    pub fn in_domain(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_builder() {
        let item = LexicalItem::new("4", "조사단장", 3)
            .with_part_of_speech("명사")
            .with_domain("행정")
            .with_gloss("조사단의 책임자");

        assert_eq!(item.label, "조사단장");
        assert_eq!(item.part_of_speech, "명사");
        assert!(item.in_domain("행정"));
        assert!(!item.in_domain("재난"));
    }

    #[test]
    fn test_item_wire_names() {
        let json = r#"{"id":"9","label":"그래도","pos":"부사","difficulty":1,"domain":["문법"],"gloss":"그렇지만 여전히"}"#;
        let item: LexicalItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.part_of_speech, "부사");
        assert_eq!(item.difficulty, 1);
        assert!(item.in_domain("문법"));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["pos"], "부사");
        assert_eq!(value["domain"][0], "문법");
    }

    #[test]
    fn test_optional_fields_default() {
        let item: LexicalItem =
            serde_json::from_str(r#"{"id":"x","label":"x","difficulty":2}"#).unwrap();
        assert!(item.domains.is_empty());
        assert_eq!(item.gloss, "");
    }
}
