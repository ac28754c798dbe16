//! Difficulty-targeted keyword replacement.
//!
//! For every keyword found in a text, the resolver looks up the chain the
//! keyword belongs to and picks the member sitting exactly at the target
//! level. There is no nearest-level fallback: a level the chain does not
//! have leaves the keyword unchanged.

use plainword_lexicon::{ChainIndex, ChainIndexer, Difficulty, LexicalGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::KeywordMatcher;

/// Outcome of resolving one keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    /// Keyword as found in the text.
    pub original: String,

    /// Text to use instead; equal to `original` when unchanged.
    pub replacement: String,

    /// Level that was requested.
    pub target_level: Difficulty,

    /// Whether `replacement` differs from `original`.
    pub changed: bool,
}

impl Replacement {
    /// A replacement that keeps the keyword as is.
    pub fn unchanged(original: impl Into<String>, target_level: Difficulty) -> Self {
        let original = original.into();
        Self {
            replacement: original.clone(),
            original,
            target_level,
            changed: false,
        }
    }

    /// A replacement that swaps the keyword for `replacement`.
    pub fn changed(
        original: impl Into<String>,
        replacement: impl Into<String>,
        target_level: Difficulty,
    ) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            target_level,
            changed: true,
        }
    }
}

/// Resolves keywords to the chain member at a target difficulty.
#[derive(Debug, Clone)]
pub struct ReplacementResolver {
    matcher: KeywordMatcher,
    indexer: ChainIndexer,
}

impl ReplacementResolver {
    /// Create a resolver.
    pub fn new(matcher: KeywordMatcher, indexer: ChainIndexer) -> Self {
        Self { matcher, indexer }
    }

    /// The keyword matcher in use.
    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Extract keywords from `text` and resolve each one against `graph`.
    ///
    /// Chains are recomputed from `graph` on every call.
    pub fn resolve(
        &self,
        graph: &LexicalGraph,
        text: &str,
        target_level: Difficulty,
    ) -> Vec<Replacement> {
        let keywords = self.matcher.extract(text);
        let index = self.indexer.index(graph);
        self.resolve_keywords(&index, &keywords, target_level)
    }

    /// Resolve already extracted keywords against a chain index.
    pub fn resolve_keywords(
        &self,
        index: &ChainIndex,
        keywords: &[String],
        target_level: Difficulty,
    ) -> Vec<Replacement> {
        keywords
            .iter()
            .map(|keyword| Self::resolve_one(index, keyword, target_level))
            .collect()
    }

    fn resolve_one(index: &ChainIndex, keyword: &str, target_level: Difficulty) -> Replacement {
        let Some(chain) = index.chain_for_label(keyword) else {
            debug!("keyword={keyword} belongs to no chain");
            return Replacement::unchanged(keyword, target_level);
        };

        let target = chain.member_at(target_level);
        debug!(
            "keyword={keyword} chain={} target_level={target_level} target={:?} levels={:?}",
            chain.key,
            target.map(|t| t.label.as_str()),
            chain.levels()
        );

        match target {
            Some(item) if item.label != keyword => {
                Replacement::changed(keyword, item.label.clone(), target_level)
            }
            _ => Replacement::unchanged(keyword, target_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_VOCABULARY;
    use plainword_lexicon::seed::fallback_graph;
    use plainword_lexicon::{AlternativeEdge, LexicalItem};
    use pretty_assertions::assert_eq;

    fn resolver() -> ReplacementResolver {
        ReplacementResolver::new(
            KeywordMatcher::new(DEFAULT_VOCABULARY.iter().copied()),
            ChainIndexer::default(),
        )
    }

    #[test]
    fn test_resolve_to_easiest() {
        let replacements = resolver().resolve(&fallback_graph().unwrap(), "조사단장 회의", 1);
        assert_eq!(
            replacements,
            vec![Replacement::changed("조사단장", "조사 책임자", 1)]
        );
    }

    #[test]
    fn test_current_level_is_not_a_change() {
        let replacements = resolver().resolve(&fallback_graph().unwrap(), "조사단장 보고", 3);
        assert_eq!(replacements, vec![Replacement::unchanged("조사단장", 3)]);
        assert_eq!(replacements[0].replacement, replacements[0].original);
    }

    #[test]
    fn test_out_of_range_level_is_unchanged() {
        let graph = fallback_graph().unwrap();
        for level in [0, 4, 99] {
            let replacements = resolver().resolve(&graph, "배수시스템 점검", level);
            assert_eq!(replacements, vec![Replacement::unchanged("배수시스템", level)]);
        }
    }

    #[test]
    fn test_keyword_without_chain() {
        // "재발" is recognised but has no item in the graph.
        let replacements = resolver().resolve(&fallback_graph().unwrap(), "재발 방지", 1);
        assert_eq!(replacements, vec![Replacement::unchanged("재발", 1)]);
    }

    #[test]
    fn test_every_keyword_reported_in_vocabulary_order() {
        let replacements = resolver().resolve(
            &fallback_graph().unwrap(),
            "배수시스템에도 불구하고 침수사고 재발",
            2,
        );
        let summary: Vec<_> = replacements
            .iter()
            .map(|r| (r.original.as_str(), r.replacement.as_str(), r.changed))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("침수사고", "물에 잠기는 사고", true),
                ("배수시스템", "물 빠지는 시설", true),
                ("불구하고", "그런데도", true),
                ("재발", "재발", false),
            ]
        );
    }

    #[test]
    fn test_isolated_item_never_a_replacement() {
        let graph = LexicalGraph::new(
            vec![
                LexicalItem::new("1", "조사단장", 3),
                LexicalItem::new("2", "조사팀 책임자", 2),
                LexicalItem::new("3", "팀장", 1),
            ],
            vec![AlternativeEdge::new("1", "2", 1)],
        )
        .unwrap();

        let replacements = resolver().resolve(&graph, "조사단장", 1);
        assert_eq!(replacements, vec![Replacement::unchanged("조사단장", 1)]);
    }

    #[test]
    fn test_replacement_wire_names() {
        let value = serde_json::to_value(Replacement::changed("a", "b", 2)).unwrap();
        assert_eq!(value["target_level"], 2);
        assert_eq!(value["changed"], true);
    }
}
