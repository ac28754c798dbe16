//! # Lexicon
//!
//! This crate holds the knowledge graph behind text simplification. It
//! provides:
//!
//! - **Lexical Items**: Words and phrases tagged with a difficulty tier
//! - **Easier-Alternative Edges**: Directed "target is easier than source" relations
//! - **Graph Store**: Validated, read-only snapshots with lookup by id and label
//! - **Chain Indexing**: Partitioning of the graph into difficulty chains
//! - **Snapshot Providers**: In-memory and JSON-file backed graph sources
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Lexicon                                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  GraphSnapshot ──► LexicalGraph ──► ChainIndexer ──► ChainIndex │
//! │       ▲                 ▲                                       │
//! │       │                 │                                       │
//! │  JsonFileStore     SnapshotProvider ◄── StaticGraph (seed)      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod chain;
pub mod edge;
pub mod error;
pub mod graph;
pub mod item;
pub mod provider;
pub mod seed;
pub mod store;

pub use chain::{Chain, ChainIndex, ChainIndexer, SYNTHETIC_KEY_PREFIX};
pub use edge::{AlternativeEdge, RelationKind};
pub use error::{LexiconError, Result, StorageError};
pub use graph::{GraphSnapshot, LexicalGraph};
pub use item::{Difficulty, LexicalItem, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use provider::{SnapshotProvider, StaticGraph};
pub use store::JsonFileStore;
