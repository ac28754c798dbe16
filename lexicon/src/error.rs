//! Error types for the lexical graph.

use thiserror::Error;

/// Result type alias for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that can occur while loading or validating a lexical graph.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// An edge references an item id that is not in the graph.
    #[error("integrity violation: edge {source_id} -> {target_id} references missing item {missing}")]
    IntegrityViolation {
        source_id: String,
        target_id: String,
        missing: String,
    },

    /// Two items share the same id.
    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    /// Two items share the same label.
    #[error("duplicate label {label:?} on items {first_id} and {second_id}")]
    DuplicateLabel {
        label: String,
        first_id: String,
        second_id: String,
    },

    /// The snapshot provider could not produce a graph.
    #[error("graph unavailable: {0}")]
    GraphUnavailable(String),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create storage directory.
    #[error("failed to create directory: {0}")]
    CreateDirectory(String),

    /// Failed to read the lexicon file.
    #[error("failed to read file: {0}")]
    ReadFile(String),

    /// Failed to write the lexicon file.
    #[error("failed to write file: {0}")]
    WriteFile(String),
}
