//! # Simplify
//!
//! This crate rewrites short passages at a requested difficulty level using
//! the lexical graph from `plainword-lexicon`. It provides:
//!
//! - **Keyword Matching**: Recognised vocabulary found in free text
//! - **Context Classification**: A first-match rule table describing the text
//! - **Replacement Resolution**: Each keyword mapped to its chain member at the target level
//! - **Rewrite Composition**: Literal substitution plus hand-written paraphrases
//!   for recognised passages
//! - **Pipeline**: The three stages above over one graph snapshot, with an
//!   observable fallback to the built-in data set
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Simplification Pipeline                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  text ──► KeywordMatcher ──► ContextClassifier      (stage 1)   │
//! │                 │                                               │
//! │                 ▼                                               │
//! │  SnapshotProvider ──► ChainIndexer ──► ReplacementResolver (2)  │
//! │                                              │                  │
//! │                                              ▼                  │
//! │                      RewriteComposer ◄── TemplateTable    (3)   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plainword_simplify::Simplifier;
//!
//! let simplifier = Simplifier::builder().build()?;
//! let result = simplifier.simplify("조사단장 회의", 1)?;
//! assert_eq!(result.stage3.rewritten_text, "조사 책임자 회의");
//! ```

pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod resolver;
pub mod response;

pub use classifier::{ContextClassifier, ContextRule, DEFAULT_CONTEXT};
pub use composer::{ParaphrasePattern, RewriteComposer, TemplateTable};
pub use config::{DEFAULT_VOCABULARY, SimplifierConfig};
pub use error::{Result, SimplifyError};
pub use matcher::KeywordMatcher;
pub use pipeline::{
    ContextStage, DatasetSource, ReplacementStage, RewriteStage, Simplifier, SimplifierBuilder,
    SimplifyResult,
};
pub use resolver::{Replacement, ReplacementResolver};
pub use response::SimplifyResponse;

// Re-export from dependencies for convenience
pub use plainword_lexicon::{
    Difficulty, GraphSnapshot, JsonFileStore, LexicalGraph, SnapshotProvider, StaticGraph,
};
