//! Graph snapshot providers.
//!
//! The simplification pipeline never holds a database handle of its own.
//! It is given a [`SnapshotProvider`] and asks it for the current graph on
//! every call.

use std::sync::Arc;

use crate::error::Result;
use crate::graph::{GraphSnapshot, LexicalGraph};

/// Source of read-only lexical graph snapshots.
pub trait SnapshotProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Produce the current graph.
    ///
    /// Returns [`LexiconError::GraphUnavailable`](crate::LexiconError::GraphUnavailable)
    /// when no graph can be produced.
    fn snapshot(&self) -> Result<Arc<LexicalGraph>>;
}

/// A provider over a fixed in-memory graph.
#[derive(Debug, Clone)]
pub struct StaticGraph {
    name: String,
    graph: Arc<LexicalGraph>,
}

impl StaticGraph {
    /// Wrap an already validated graph.
    pub fn new(name: impl Into<String>, graph: LexicalGraph) -> Self {
        Self {
            name: name.into(),
            graph: Arc::new(graph),
        }
    }

    /// Validate a snapshot and wrap it.
    pub fn from_snapshot(name: impl Into<String>, snapshot: GraphSnapshot) -> Result<Self> {
        Ok(Self::new(name, snapshot.into_graph()?))
    }

    /// The wrapped graph.
    pub fn graph(&self) -> Arc<LexicalGraph> {
        Arc::clone(&self.graph)
    }
}

impl SnapshotProvider for StaticGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn snapshot(&self) -> Result<Arc<LexicalGraph>> {
        Ok(self.graph())
    }
}
