//! Context classification.
//!
//! A small decision table: each [`ContextRule`] names the keywords that
//! must all be present, and the first rule that holds supplies the label.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Label returned when no rule matches.
pub const DEFAULT_CONTEXT: &str = "입력 텍스트에서 발견된 어려운 단어들을 쉬운 단어로 바꾸는 과정";

/// One row of the classification table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextRule {
    /// Keywords that must all occur in the text.
    pub required: Vec<String>,

    /// Label produced when the rule holds.
    pub label: String,
}

impl ContextRule {
    /// Create a rule.
    pub fn new<I, S>(required: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// Whether every required keyword occurs in `text`.
    pub fn holds(&self, text: &str) -> bool {
        self.required.iter().all(|k| text.contains(k.as_str()))
    }
}

/// Maps a text to a short description of what it is about.
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    rules: Vec<ContextRule>,
    default_label: String,
}

impl ContextClassifier {
    /// Create a classifier from rules in priority order.
    pub fn new(rules: Vec<ContextRule>, default_label: impl Into<String>) -> Self {
        Self {
            rules,
            default_label: default_label.into(),
        }
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &[ContextRule] {
        &self.rules
    }

    /// The label used when nothing matches.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Label of the first rule that holds for `text`, or the default label.
    pub fn classify(&self, text: &str) -> String {
        match self.rules.iter().position(|rule| rule.holds(text)) {
            Some(idx) => {
                debug!("Context rule {idx} matched");
                self.rules[idx].label.clone()
            }
            None => self.default_label.clone(),
        }
    }
}

impl Default for ContextClassifier {
    /// Rules for the flood-investigation reporting domain, most specific first.
    fn default() -> Self {
        Self::new(
            vec![
                ContextRule::new(
                    ["침수사고", "조사단장", "재발", "관리체계"],
                    "침수 사고의 재발 원인은 배수시설이 아닌 관리 체계와 소통 부족에 있다는 주장",
                ),
                ContextRule::new(["침수사고", "조사단장"], "침수 사고에 대한 조사 및 분석 내용"),
                ContextRule::new(["침수사고"], "침수 사고와 관련된 내용"),
                ContextRule::new(["조사단장"], "조사 및 분석 관련 내용"),
            ],
            DEFAULT_CONTEXT,
        )
    }
}
