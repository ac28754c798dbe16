//! Simplification pipeline orchestration.
//!
//! This module provides the main entry point: [`Simplifier::simplify`] runs
//! keyword matching and context classification (stage 1), replacement
//! resolution (stage 2) and rewriting (stage 3) against one graph snapshot.

use std::sync::Arc;

use plainword_lexicon::seed::{self, FALLBACK_NAME};
use plainword_lexicon::{
    ChainIndex, ChainIndexer, Difficulty, GraphSnapshot, LexicalGraph, SnapshotProvider,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classifier::ContextClassifier;
use crate::composer::{RewriteComposer, TemplateTable};
use crate::config::SimplifierConfig;
use crate::error::{Result, SimplifyError};
use crate::matcher::KeywordMatcher;
use crate::resolver::{Replacement, ReplacementResolver};

/// Which data set served a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DatasetSource {
    /// The configured provider.
    Primary {
        /// Provider name.
        provider: String,
    },
    /// The built-in data set, because the provider was unavailable.
    Fallback {
        /// Why the provider could not be used.
        reason: String,
    },
}

impl DatasetSource {
    /// Whether the fallback data set is in effect.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Stage 1: what the text is about and which keywords it contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextStage {
    /// Context label.
    pub context: String,

    /// Recognised keywords, in vocabulary order.
    pub keywords: Vec<String>,
}

/// Stage 2: per-keyword replacements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplacementStage {
    /// One entry per keyword.
    pub replacements: Vec<Replacement>,
}

/// Stage 3: the rewritten text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewriteStage {
    /// Text at the target level.
    pub rewritten_text: String,
}

/// Result of running the full pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimplifyResult {
    /// Context and keywords.
    pub stage1: ContextStage,

    /// Replacements.
    pub stage2: ReplacementStage,

    /// Rewritten text.
    pub stage3: RewriteStage,

    /// Data set the result was computed from.
    pub dataset: DatasetSource,
}

/// The simplification pipeline.
///
/// Holds no per-request state; every call takes a fresh snapshot from the
/// provider and recomputes chains from it, so one `Simplifier` can serve
/// concurrent callers.
pub struct Simplifier {
    config: SimplifierConfig,
    provider: Arc<dyn SnapshotProvider>,
    fallback: Option<Arc<LexicalGraph>>,
    classifier: ContextClassifier,
    resolver: ReplacementResolver,
    composer: RewriteComposer,
}

impl Simplifier {
    /// Create a new pipeline builder.
    pub fn builder() -> SimplifierBuilder {
        SimplifierBuilder::new()
    }

    /// Create a pipeline with default tables over `provider`.
    pub fn new(config: SimplifierConfig, provider: Arc<dyn SnapshotProvider>) -> Result<Self> {
        Self::builder().with_config(config).with_provider(provider).build()
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimplifierConfig {
        &self.config
    }

    /// Run all three stages on `text` at `target_level`.
    pub fn simplify(&self, text: &str, target_level: Difficulty) -> Result<SimplifyResult> {
        if text.is_empty() {
            return Err(SimplifyError::InvalidInput("text is required".to_string()));
        }

        let (graph, dataset) = self.snapshot()?;

        // Stage 1
        let keywords = self.extract_keywords(text);
        let context = self.classify(text);
        debug!("Stage 1: context={context:?} keywords={keywords:?}");

        // Stage 2
        let index = self.index(&graph);
        let replacements = self
            .resolver
            .resolve_keywords(&index, &keywords, target_level);
        debug!(
            "Stage 2: {} of {} keywords changed",
            replacements.iter().filter(|r| r.changed).count(),
            replacements.len()
        );

        // Stage 3
        let rewritten_text = self.composer.compose(text, &replacements, target_level);

        info!(
            "Simplified {} chars at level {target_level} using {}",
            text.chars().count(),
            dataset_name(&dataset)
        );

        Ok(SimplifyResult {
            stage1: ContextStage { context, keywords },
            stage2: ReplacementStage { replacements },
            stage3: RewriteStage { rewritten_text },
            dataset,
        })
    }

    /// Run the pipeline at the configured default level.
    pub fn simplify_default(&self, text: &str) -> Result<SimplifyResult> {
        self.simplify(text, self.config.default_level)
    }

    /// Recognised keywords in `text`.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.resolver.matcher().extract(text)
    }

    /// Context label for `text`.
    pub fn classify(&self, text: &str) -> String {
        self.classifier.classify(text)
    }

    /// Replacements for the keywords of `text` at `target_level`.
    pub fn resolve(&self, text: &str, target_level: Difficulty) -> Result<Vec<Replacement>> {
        let (graph, _) = self.snapshot()?;
        Ok(self.resolver.resolve(&graph, text, target_level))
    }

    /// Chains of the current snapshot.
    pub fn chains(&self) -> Result<(ChainIndex, DatasetSource)> {
        let (graph, dataset) = self.snapshot()?;
        Ok((self.index(&graph), dataset))
    }

    /// The current graph in serialisable form.
    pub fn graph_data(&self) -> Result<(GraphSnapshot, DatasetSource)> {
        let (graph, dataset) = self.snapshot()?;
        Ok((graph.to_snapshot(), dataset))
    }

    /// Which data set would serve a request right now.
    pub fn setup_mode(&self) -> Result<DatasetSource> {
        self.snapshot().map(|(_, dataset)| dataset)
    }

    fn index(&self, graph: &LexicalGraph) -> ChainIndex {
        ChainIndexer::new(self.config.max_difficulty).index(graph)
    }

    /// Take a snapshot from the provider, falling back to the built-in
    /// data set when allowed.
    fn snapshot(&self) -> Result<(Arc<LexicalGraph>, DatasetSource)> {
        match self.provider.snapshot() {
            Ok(graph) => Ok((
                graph,
                DatasetSource::Primary {
                    provider: self.provider.name().to_string(),
                },
            )),
            Err(e) => match &self.fallback {
                Some(fallback) => {
                    warn!(
                        "Lexicon provider {} unavailable ({e}); using built-in data set",
                        self.provider.name()
                    );
                    Ok((
                        Arc::clone(fallback),
                        DatasetSource::Fallback {
                            reason: e.to_string(),
                        },
                    ))
                }
                None => Err(e.into()),
            },
        }
    }
}

fn dataset_name(dataset: &DatasetSource) -> &str {
    match dataset {
        DatasetSource::Primary { provider } => provider.as_str(),
        DatasetSource::Fallback { .. } => FALLBACK_NAME,
    }
}

/// Builder for [`Simplifier`].
pub struct SimplifierBuilder {
    config: SimplifierConfig,
    provider: Option<Arc<dyn SnapshotProvider>>,
    fallback: Option<LexicalGraph>,
    classifier: Option<ContextClassifier>,
    templates: Option<TemplateTable>,
}

impl SimplifierBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: SimplifierConfig::default(),
            provider: None,
            fallback: None,
            classifier: None,
            templates: None,
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: SimplifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the snapshot provider. Defaults to the built-in data set.
    pub fn with_provider(mut self, provider: Arc<dyn SnapshotProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the fallback data set.
    ///
    /// Ignored when the configuration disables fallback.
    pub fn with_fallback(mut self, graph: LexicalGraph) -> Self {
        self.fallback = Some(graph);
        self
    }

    /// Replace the context classification table.
    pub fn with_classifier(mut self, classifier: ContextClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Replace the paraphrase template table.
    pub fn with_templates(mut self, templates: TemplateTable) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> Result<Simplifier> {
        self.config.validate()?;

        let provider: Arc<dyn SnapshotProvider> = match self.provider {
            Some(provider) => provider,
            None => Arc::new(seed::fallback_provider()?),
        };

        let fallback = if self.config.fallback_enabled {
            let graph = match self.fallback {
                Some(graph) => graph,
                None => seed::fallback_graph()?,
            };
            Some(Arc::new(graph))
        } else {
            if self.fallback.is_some() {
                warn!("Fallback data set supplied but fallback is disabled in config; ignoring it");
            }
            None
        };

        let matcher = KeywordMatcher::new(self.config.vocabulary.iter().cloned());
        let resolver =
            ReplacementResolver::new(matcher, ChainIndexer::new(self.config.max_difficulty));
        let composer = RewriteComposer::new(
            self.templates.unwrap_or_else(TemplateTable::flood_report),
            self.config.max_difficulty,
        );

        info!(
            "Simplifier ready: provider={}, {} keywords, fallback {}",
            provider.name(),
            self.config.vocabulary.len(),
            if fallback.is_some() { "enabled" } else { "disabled" }
        );

        Ok(Simplifier {
            classifier: self.classifier.unwrap_or_default(),
            resolver,
            composer,
            fallback,
            provider,
            config: self.config,
        })
    }
}

impl Default for SimplifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainword_lexicon::{JsonFileStore, LexicalItem, StaticGraph};
    use pretty_assertions::assert_eq;

    fn simplifier() -> Simplifier {
        Simplifier::builder().build().unwrap()
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = simplifier().simplify("", 1).unwrap_err();
        assert!(matches!(err, SimplifyError::InvalidInput(_)));
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_three_stages() {
        let result = simplifier().simplify("조사단장 회의", 1).unwrap();

        assert_eq!(result.stage1.keywords, vec!["조사단장"]);
        assert_eq!(result.stage1.context, "조사 및 분석 관련 내용");
        assert_eq!(
            result.stage2.replacements,
            vec![Replacement::changed("조사단장", "조사 책임자", 1)]
        );
        assert_eq!(result.stage3.rewritten_text, "조사 책임자 회의");
        assert_eq!(
            result.dataset,
            DatasetSource::Primary {
                provider: FALLBACK_NAME.to_string()
            }
        );
    }

    #[test]
    fn test_no_keywords_is_not_an_error() {
        let result = simplifier().simplify("아무 관련 없는 문장입니다", 1).unwrap();

        assert!(result.stage1.keywords.is_empty());
        assert!(result.stage2.replacements.is_empty());
        assert_eq!(result.stage3.rewritten_text, "아무 관련 없는 문장입니다");
    }

    #[test]
    fn test_unavailable_provider_falls_back() {
        let simplifier = Simplifier::builder()
            .with_provider(Arc::new(JsonFileStore::new("/nonexistent/lexicon.json")))
            .build()
            .unwrap();

        let result = simplifier.simplify("침수사고", 2).unwrap();
        assert!(result.dataset.is_fallback());
        assert_eq!(result.stage3.rewritten_text, "물에 잠기는 사고");
        assert!(simplifier.setup_mode().unwrap().is_fallback());
    }

    #[test]
    fn test_unavailable_provider_without_fallback_fails() {
        let simplifier = Simplifier::builder()
            .with_config(SimplifierConfig::default().without_fallback())
            .with_provider(Arc::new(JsonFileStore::new("/nonexistent/lexicon.json")))
            .build()
            .unwrap();

        let err = simplifier.simplify("침수사고", 2).unwrap_err();
        assert_eq!(err.kind(), "graph_unavailable");
    }

    #[test]
    fn test_custom_provider_and_vocabulary() {
        let graph = LexicalGraph::new(
            vec![
                LexicalItem::new("a", "상이하다", 3),
                LexicalItem::new("b", "다르다", 1),
            ],
            vec![plainword_lexicon::AlternativeEdge::new("a", "b", 1)],
        )
        .unwrap();
        let simplifier = Simplifier::new(
            SimplifierConfig::default().with_vocabulary(["상이하다"]),
            Arc::new(StaticGraph::new("custom", graph)),
        )
        .unwrap();

        let result = simplifier.simplify_default("의견이 상이하다").unwrap();
        assert_eq!(result.stage3.rewritten_text, "의견이 다르다");
        assert_eq!(simplifier.setup_mode().unwrap(), DatasetSource::Primary {
            provider: "custom".to_string()
        });
    }

    #[test]
    fn test_disabled_fallback_ignores_supplied_graph() {
        let simplifier = Simplifier::builder()
            .with_config(SimplifierConfig::default().without_fallback())
            .with_provider(Arc::new(JsonFileStore::new("/nonexistent/lexicon.json")))
            .with_fallback(seed::fallback_graph().unwrap())
            .build()
            .unwrap();

        let err = simplifier.setup_mode().unwrap_err();
        assert_eq!(err.kind(), "graph_unavailable");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Simplifier::builder()
            .with_config(SimplifierConfig::default().with_default_level(0))
            .build();
        assert!(matches!(result, Err(SimplifyError::Config(_))));
    }

    #[test]
    fn test_graph_data_and_chains() {
        let simplifier = simplifier();

        let (snapshot, _) = simplifier.graph_data().unwrap();
        assert_eq!(snapshot.nodes.len(), 12);

        let (chains, _) = simplifier.chains().unwrap();
        assert_eq!(chains.len(), 4);
    }

    #[test]
    fn test_simplifier_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Simplifier>();
    }
}
