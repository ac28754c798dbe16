//! The lexical graph store.
//!
//! A [`LexicalGraph`] is an immutable, validated snapshot of lexical items
//! and the easier-alternative edges between them. Validation happens once,
//! when the graph is built, so that later traversal never meets a dangling
//! edge:
//!
//! - every item id is unique
//! - every item label is unique
//! - every edge endpoint refers to an existing item
//!
//! [`GraphSnapshot`] is the plain serialisable form (`{nodes, edges}`) that
//! stores load from and export to.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::edge::AlternativeEdge;
use crate::error::{LexiconError, Result};
use crate::item::{Difficulty, LexicalItem};

/// Unvalidated items and edges, as read from or written to storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    /// All lexical items.
    pub nodes: Vec<LexicalItem>,

    /// All easier-alternative edges.
    pub edges: Vec<AlternativeEdge>,
}

impl GraphSnapshot {
    /// Create a snapshot from items and edges.
    pub fn new(nodes: Vec<LexicalItem>, edges: Vec<AlternativeEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Validate the snapshot into a graph.
    pub fn into_graph(self) -> Result<LexicalGraph> {
        LexicalGraph::new(self.nodes, self.edges)
    }
}

/// A validated, read-only lexical graph.
#[derive(Debug, Clone)]
pub struct LexicalGraph {
    items: Vec<LexicalItem>,
    edges: Vec<AlternativeEdge>,

    /// Item id -> position in `items`.
    by_id: HashMap<String, usize>,

    /// Item label -> position in `items`.
    by_label: HashMap<String, usize>,

    /// Item id -> positions in `edges` touching that item.
    incident: HashMap<String, Vec<usize>>,
}

impl LexicalGraph {
    /// Build a graph, checking id uniqueness, label uniqueness and
    /// referential integrity of every edge.
    pub fn new(items: Vec<LexicalItem>, edges: Vec<AlternativeEdge>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_label: HashMap<String, usize> = HashMap::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(LexiconError::DuplicateId(item.id.clone()));
            }
            if let Some(&first) = by_label.get(&item.label) {
                return Err(LexiconError::DuplicateLabel {
                    label: item.label.clone(),
                    first_id: items[first].id.clone(),
                    second_id: item.id.clone(),
                });
            }
            by_label.insert(item.label.clone(), idx);
        }

        let mut incident: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            for endpoint in [&edge.source, &edge.target] {
                if !by_id.contains_key(endpoint) {
                    return Err(LexiconError::IntegrityViolation {
                        source_id: edge.source.clone(),
                        target_id: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            incident.entry(edge.source.clone()).or_default().push(idx);
            if edge.target != edge.source {
                incident.entry(edge.target.clone()).or_default().push(idx);
            }
        }

        let graph = Self {
            items,
            edges,
            by_id,
            by_label,
            incident,
        };

        for edge in graph.monotonicity_violations() {
            warn!(
                "Edge {} does not lower difficulty",
                edge.to_string_repr()
            );
        }

        debug!(
            "Built lexical graph with {} items and {} edges",
            graph.items.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// All items, in load order.
    pub fn items(&self) -> &[LexicalItem] {
        &self.items
    }

    /// All edges, in load order.
    pub fn edges(&self) -> &[AlternativeEdge] {
        &self.edges
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the graph has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&LexicalItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    /// Look up an item by its label.
    pub fn find_by_label(&self, label: &str) -> Option<&LexicalItem> {
        self.by_label.get(label).map(|&idx| &self.items[idx])
    }

    /// Edges whose source is `id`.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a AlternativeEdge> + 'a {
        self.incident_edges(id).filter(move |e| e.source == id)
    }

    /// Edges whose target is `id`.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a AlternativeEdge> + 'a {
        self.incident_edges(id).filter(move |e| e.target == id)
    }

    /// Ids of items adjacent to `id`, following edges in either direction.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.incident_edges(id).filter_map(move |e| e.other_end(id))
    }

    /// Whether `id` has at least one incident edge.
    pub fn is_connected(&self, id: &str) -> bool {
        self.incident.get(id).is_some_and(|edges| !edges.is_empty())
    }

    fn incident_edges<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a AlternativeEdge> + 'a {
        self.incident
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.edges[idx])
    }

    /// Highest difficulty present in the graph.
    pub fn max_difficulty(&self) -> Option<Difficulty> {
        self.items.iter().map(|i| i.difficulty).max()
    }

    /// Edges whose target is not strictly easier than their source.
    pub fn monotonicity_violations(&self) -> Vec<&AlternativeEdge> {
        self.edges
            .iter()
            .filter(|edge| match (self.get(&edge.source), self.get(&edge.target)) {
                (Some(source), Some(target)) => target.difficulty >= source.difficulty,
                _ => false,
            })
            .collect()
    }

    /// Direct easier alternatives per source label, keyed by the
    /// alternative's difficulty.
    ///
    /// Only direct edges are followed; a later edge to the same difficulty
    /// overwrites an earlier one.
    pub fn word_mapping(&self) -> BTreeMap<String, BTreeMap<Difficulty, String>> {
        let mut mapping: BTreeMap<String, BTreeMap<Difficulty, String>> = BTreeMap::new();

        for edge in &self.edges {
            if let (Some(source), Some(target)) = (self.get(&edge.source), self.get(&edge.target))
            {
                mapping
                    .entry(source.label.clone())
                    .or_default()
                    .insert(target.difficulty, target.label.clone());
            }
        }

        mapping
    }

    /// Export the graph in its serialisable form.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.items.clone(), self.edges.clone())
    }
}

impl TryFrom<GraphSnapshot> for LexicalGraph {
    type Error = LexiconError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        snapshot.into_graph()
    }
}
