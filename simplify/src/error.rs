//! Error types for the simplification pipeline.

use thiserror::Error;

/// Result type alias for simplification operations.
pub type Result<T> = std::result::Result<T, SimplifyError>;

/// Errors that can occur in the simplification pipeline.
#[derive(Error, Debug)]
pub enum SimplifyError {
    /// Input text was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Lexicon error (load, validation, availability).
    #[error("lexicon error: {0}")]
    Lexicon(#[from] plainword_lexicon::LexiconError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimplifyError {
    /// Short machine-readable tag for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Lexicon(plainword_lexicon::LexiconError::GraphUnavailable(_)) => {
                "graph_unavailable"
            }
            Self::Lexicon(plainword_lexicon::LexiconError::IntegrityViolation { .. }) => {
                "integrity_violation"
            }
            Self::Lexicon(_) => "lexicon",
            Self::Config(_) | Self::ConfigParse(_) => "config",
            Self::Io(_) => "io",
        }
    }
}
