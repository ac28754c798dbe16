//! Configuration for the simplification pipeline.

use std::path::{Path, PathBuf};

use plainword_lexicon::{Difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SimplifyError};

/// Keywords recognised in input text by default.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "침수사고",
    "조사단장",
    "배수시스템",
    "불구하고",
    "재발",
    "관리체계",
    "소통부족",
];

/// Configuration for the simplifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimplifierConfig {
    /// Recognised keywords, in the order they are reported.
    pub vocabulary: Vec<String>,

    /// Hardest difficulty tier. Chains are keyed on it, and rewriting at
    /// this level keeps the original text.
    pub max_difficulty: Difficulty,

    /// Target level used when a caller does not give one.
    pub default_level: Difficulty,

    /// Path of the JSON lexicon file.
    pub data_path: PathBuf,

    /// Whether to serve the built-in lexicon when the store is unavailable.
    pub fallback_enabled: bool,
}

impl SimplifierConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognised vocabulary.
    pub fn with_vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = vocabulary.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hardest difficulty tier.
    pub fn with_max_difficulty(mut self, max_difficulty: Difficulty) -> Self {
        self.max_difficulty = max_difficulty;
        self
    }

    /// Set the default target level.
    pub fn with_default_level(mut self, level: Difficulty) -> Self {
        self.default_level = level;
        self
    }

    /// Set the lexicon file path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Fail instead of serving the built-in lexicon when the store is unavailable.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_enabled = false;
        self
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        debug!("Loaded simplifier config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Check that the difficulty settings are consistent.
    pub fn validate(&self) -> Result<()> {
        if self.max_difficulty < MIN_DIFFICULTY {
            return Err(SimplifyError::Config(format!(
                "max_difficulty must be at least {MIN_DIFFICULTY}, got {}",
                self.max_difficulty
            )));
        }
        if !(MIN_DIFFICULTY..=self.max_difficulty).contains(&self.default_level) {
            return Err(SimplifyError::Config(format!(
                "default_level {} is outside {MIN_DIFFICULTY}..={}",
                self.default_level, self.max_difficulty
            )));
        }
        Ok(())
    }
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| (*s).to_string()).collect(),
            max_difficulty: MAX_DIFFICULTY,
            default_level: MIN_DIFFICULTY,
            data_path: dirs::data_dir()
                .unwrap_or_default()
                .join("plainword/lexicon.json"),
            fallback_enabled: true,
        }
    }
}
