//! Rewriting text at a target difficulty.
//!
//! Rewriting happens in two tiers:
//!
//! 1. **Literal pass**: every changed [`Replacement`] is substituted into the
//!    text, in the order the replacements were produced. A later
//!    substitution can match text introduced by an earlier one; order is the
//!    only rule.
//! 2. **Template pass**: if the original text contains every keyword of a
//!    known [`ParaphrasePattern`], a hand-written paraphrase for the target
//!    level replaces the literal result. At the hardest level the original
//!    text is returned as is.

use std::collections::BTreeMap;

use plainword_lexicon::{Difficulty, MAX_DIFFICULTY};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::Replacement;

/// A recognised kind of passage with hand-written paraphrases per level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParaphrasePattern {
    /// Pattern identifier.
    pub id: String,

    /// Keywords that must all occur in the original text.
    pub required: Vec<String>,

    /// Paraphrase per target level.
    pub templates: BTreeMap<Difficulty, String>,
}

impl ParaphrasePattern {
    /// Create a pattern with no templates.
    pub fn new<I, S>(id: impl Into<String>, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            required: required.into_iter().map(Into::into).collect(),
            templates: BTreeMap::new(),
        }
    }

    /// Add the paraphrase used at `level`.
    pub fn with_template(mut self, level: Difficulty, text: impl Into<String>) -> Self {
        self.templates.insert(level, text.into());
        self
    }

    /// Whether `text` contains every required keyword.
    pub fn matches(&self, text: &str) -> bool {
        self.required.iter().all(|k| text.contains(k.as_str()))
    }

    /// Paraphrase for `level`, if one was written.
    pub fn template(&self, level: Difficulty) -> Option<&str> {
        self.templates.get(&level).map(String::as_str)
    }
}

/// Lookup table from (pattern, level) to paraphrase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateTable {
    patterns: Vec<ParaphrasePattern>,
}

impl TemplateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern. Patterns are tried in insertion order.
    pub fn with_pattern(mut self, pattern: ParaphrasePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// All patterns.
    pub fn patterns(&self) -> &[ParaphrasePattern] {
        &self.patterns
    }

    /// First pattern matching `text`.
    pub fn find(&self, text: &str) -> Option<&ParaphrasePattern> {
        self.patterns.iter().find(|p| p.matches(text))
    }

    /// Table for the flood-investigation report.
    pub fn flood_report() -> Self {
        Self::new().with_pattern(
            ParaphrasePattern::new("flood_investigation", ["침수사고", "조사단장"])
                .with_template(
                    1,
                    "7월 17일, 대구 북구 노곡동에서 큰 비로 물에 잠기는 사고가 또 일어났어요. \
                     이 사고를 조사한 팀의 책임자는 이렇게 말했어요. \
                     '예전에도 이곳에서 비슷한 일이 있었고, 그 뒤로 물이 빠지게 하는 장치를 고쳤어요. \
                     그래도 이번에 다시 사고가 난 건, 제대로 관리하지 못했고, \
                     서로 소통이 잘 안 됐기 때문이에요.'",
                )
                .with_template(
                    2,
                    "지난 달 17일 대구 북구 노곡동에서 물에 잠기는 사고가 발생했습니다. \
                     이 사고를 조사한 팀의 책임자는 \"과거 노곡동 물에 잠기는 사고 이후 \
                     물 빠지는 시설이 보강됐음그런데도 이번 사고가 재발된 원인은 \
                     관리체계 및 소통부족 문제에 있다\"고 진단했습니다.",
                ),
        )
    }
}

/// Produces the rewritten text.
#[derive(Debug, Clone)]
pub struct RewriteComposer {
    templates: TemplateTable,
    max_difficulty: Difficulty,
}

impl RewriteComposer {
    /// Create a composer.
    pub fn new(templates: TemplateTable, max_difficulty: Difficulty) -> Self {
        Self {
            templates,
            max_difficulty,
        }
    }

    /// The template table in use.
    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Rewrite `original` for `target_level`.
    pub fn compose(
        &self,
        original: &str,
        replacements: &[Replacement],
        target_level: Difficulty,
    ) -> String {
        let literal = Self::apply_literal(original, replacements);

        let Some(pattern) = self.templates.find(original) else {
            return literal;
        };

        if target_level == self.max_difficulty {
            debug!("Pattern {} matched at hardest level; keeping original", pattern.id);
            return original.to_string();
        }

        match pattern.template(target_level) {
            Some(template) => {
                debug!("Pattern {} matched; using level {target_level} template", pattern.id);
                template.to_string()
            }
            None => {
                debug!(
                    "Pattern {} has no template for level {target_level}; using literal rewrite",
                    pattern.id
                );
                literal
            }
        }
    }

    /// Substitute every changed replacement, in order, across the whole text.
    pub fn apply_literal(text: &str, replacements: &[Replacement]) -> String {
        replacements
            .iter()
            .filter(|r| r.changed && r.original != r.replacement)
            .fold(text.to_string(), |acc, r| {
                acc.replace(r.original.as_str(), r.replacement.as_str())
            })
    }
}

impl Default for RewriteComposer {
    fn default() -> Self {
        Self::new(TemplateTable::flood_report(), MAX_DIFFICULTY)
    }
}
