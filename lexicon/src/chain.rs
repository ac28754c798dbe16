//! Difficulty chains.
//!
//! A chain is a maximal group of items connected by easier-alternative
//! edges, with edges followed in either direction. Chains partition the
//! connected items of a graph; an item with no incident edge belongs to no
//! chain.
//!
//! Each chain is addressed by a key: the label of its member at the hardest
//! tier, or `chain_<n>` when no member sits at that tier. A `chain_<n>` that
//! is already some item's label is skipped, so keys never collide.
//! Traversal starts from items in ascending id order, so the numbering of
//! synthetic keys is stable for a fixed data set. It is not stable across
//! data sets: adding or removing items can renumber them.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::LexicalGraph;
use crate::item::{Difficulty, LexicalItem, MAX_DIFFICULTY};

/// Prefix of keys assigned to chains without a hardest-tier member.
pub const SYNTHETIC_KEY_PREFIX: &str = "chain_";

/// A connected group of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chain {
    /// Canonical key.
    pub key: String,

    /// Whether `key` was generated rather than taken from a member label.
    pub synthetic: bool,

    /// Members in breadth-first discovery order.
    pub members: Vec<LexicalItem>,
}

impl Chain {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a member carries this label.
    pub fn contains_label(&self, label: &str) -> bool {
        self.members.iter().any(|m| m.label == label)
    }

    /// Whether a member has this id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// First member (in discovery order) whose difficulty equals `difficulty`.
    pub fn member_at(&self, difficulty: Difficulty) -> Option<&LexicalItem> {
        self.members.iter().find(|m| m.difficulty == difficulty)
    }

    /// Distinct difficulty tiers present, ascending.
    pub fn levels(&self) -> Vec<Difficulty> {
        let mut levels: Vec<_> = self.members.iter().map(|m| m.difficulty).collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
}

/// The chains of one graph snapshot, in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainIndex {
    chains: Vec<Chain>,
}

impl ChainIndex {
    /// All chains, in discovery order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether no chain was found.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Get a chain by key.
    pub fn get(&self, key: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.key == key)
    }

    /// All chain keys, in discovery order.
    pub fn keys(&self) -> Vec<&str> {
        self.chains.iter().map(|c| c.key.as_str()).collect()
    }

    /// First chain containing an item with this label.
    pub fn chain_for_label(&self, label: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.contains_label(label))
    }

    /// First chain containing the item with this id.
    pub fn chain_for_id(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.contains_id(id))
    }
}

/// Partitions a graph into difficulty chains.
#[derive(Debug, Clone)]
pub struct ChainIndexer {
    /// Difficulty of the member whose label becomes the chain key.
    key_difficulty: Difficulty,
}

impl ChainIndexer {
    /// Create an indexer keyed on the given hardest tier.
    pub fn new(key_difficulty: Difficulty) -> Self {
        Self { key_difficulty }
    }

    /// Compute the chains of a graph.
    pub fn index(&self, graph: &LexicalGraph) -> ChainIndex {
        let mut order: Vec<&LexicalItem> = graph.items().iter().collect();
        order.sort_by(|a, b| a.id.cmp(&b.id));

        // Member labels can collide with generated keys.
        let labels: HashSet<&str> = graph.items().iter().map(|item| item.label.as_str()).collect();

        let mut visited: HashSet<&str> = HashSet::with_capacity(order.len());
        let mut chains = Vec::new();
        let mut next_synthetic = 0usize;
        let mut synthetic_count = 0usize;

        for start in order {
            if visited.contains(start.id.as_str()) {
                continue;
            }

            let members = Self::component(graph, &start.id, &mut visited);
            if members.len() < 2 {
                continue;
            }

            let (key, synthetic) = match members
                .iter()
                .find(|m| m.difficulty == self.key_difficulty)
            {
                Some(hardest) => (hardest.label.clone(), false),
                None => {
                    let key = loop {
                        let candidate = format!("{SYNTHETIC_KEY_PREFIX}{next_synthetic}");
                        next_synthetic += 1;
                        if !labels.contains(candidate.as_str()) {
                            break candidate;
                        }
                        debug!("Skipping synthetic key {candidate}: taken by a label");
                    };
                    synthetic_count += 1;
                    (key, true)
                }
            };

            chains.push(Chain {
                key,
                synthetic,
                members,
            });
        }

        debug!(
            "Indexed {} chains ({} synthetic) over {} items",
            chains.len(),
            synthetic_count,
            graph.len()
        );
        ChainIndex { chains }
    }

    /// Breadth-first walk from `start`, marking every reached item visited.
    fn component<'g>(
        graph: &'g LexicalGraph,
        start: &'g str,
        visited: &mut HashSet<&'g str>,
    ) -> Vec<LexicalItem> {
        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            let Some(item) = graph.get(current) else {
                continue;
            };
            members.push(item.clone());

            for next in graph.neighbors(&item.id) {
                if !visited.contains(next) {
                    queue.push_back(next);
                }
            }
        }

        members
    }
}

impl Default for ChainIndexer {
    fn default() -> Self {
        Self::new(MAX_DIFFICULTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::AlternativeEdge;
    use pretty_assertions::assert_eq;

    fn graph(items: Vec<LexicalItem>, edges: Vec<AlternativeEdge>) -> LexicalGraph {
        LexicalGraph::new(items, edges).unwrap()
    }

    fn two_chains_and_an_orphan() -> LexicalGraph {
        graph(
            vec![
                LexicalItem::new("1", "침수사고", 3),
                LexicalItem::new("2", "물에 잠기는 사고", 2),
                LexicalItem::new("3", "물이 차서 생긴 사고", 1),
                LexicalItem::new("4", "조사단장", 3),
                LexicalItem::new("5", "조사팀 책임자", 2),
                LexicalItem::new("6", "조사 책임자", 1),
                LexicalItem::new("7", "외톨이", 1),
            ],
            vec![
                AlternativeEdge::new("1", "2", 1),
                AlternativeEdge::new("2", "3", 2),
                AlternativeEdge::new("4", "5", 1),
                AlternativeEdge::new("5", "6", 2),
            ],
        )
    }

    #[test]
    fn test_chains_keyed_by_hardest_label() {
        let index = ChainIndexer::default().index(&two_chains_and_an_orphan());

        assert_eq!(index.keys(), vec!["침수사고", "조사단장"]);
        assert!(index.chains().iter().all(|c| !c.synthetic && c.len() == 3));
        assert_eq!(
            index.get("조사단장").and_then(|c| c.member_at(1)).map(|m| m.label.as_str()),
            Some("조사 책임자")
        );
    }

    #[test]
    fn test_isolated_item_excluded() {
        let index = ChainIndexer::default().index(&two_chains_and_an_orphan());

        assert!(index.chain_for_id("7").is_none());
        assert!(index.chain_for_label("외톨이").is_none());
    }

    #[test]
    fn test_partition_property() {
        let graph = two_chains_and_an_orphan();
        let index = ChainIndexer::default().index(&graph);

        let mut seen = HashSet::new();
        for chain in index.chains() {
            for member in &chain.members {
                assert!(seen.insert(member.id.clone()), "{} in two chains", member.id);
            }
        }
        for item in graph.items() {
            assert_eq!(seen.contains(&item.id), graph.is_connected(&item.id));
        }
    }

    #[test]
    fn test_traversal_follows_edges_backwards() {
        // Starting from the easiest item must still reach the hardest one.
        let graph = graph(
            vec![
                LexicalItem::new("a", "쉬운 말", 1),
                LexicalItem::new("b", "중간 말", 2),
                LexicalItem::new("c", "어려운 말", 3),
            ],
            vec![
                AlternativeEdge::new("c", "b", 1),
                AlternativeEdge::new("b", "a", 2),
            ],
        );
        let index = ChainIndexer::default().index(&graph);

        assert_eq!(index.len(), 1);
        assert_eq!(index.chains()[0].key, "어려운 말");
        assert_eq!(index.chains()[0].members[0].id, "a");
    }

    #[test]
    fn test_synthetic_keys_follow_id_order() {
        let items = vec![
            LexicalItem::new("z1", "다", 2),
            LexicalItem::new("z2", "라", 1),
            LexicalItem::new("a1", "가", 2),
            LexicalItem::new("a2", "나", 1),
        ];
        let edges = vec![
            AlternativeEdge::new("z1", "z2", 1),
            AlternativeEdge::new("a1", "a2", 1),
        ];

        let index = ChainIndexer::default().index(&graph(items.clone(), edges.clone()));
        assert_eq!(index.keys(), vec!["chain_0", "chain_1"]);
        assert!(index.get("chain_0").unwrap().contains_id("a1"));

        // Same data, different load order: same numbering.
        let mut reversed = items;
        reversed.reverse();
        let again = ChainIndexer::default().index(&graph(reversed, edges));
        assert!(again.get("chain_0").unwrap().contains_id("a1"));
        assert!(again.get("chain_1").unwrap().contains_id("z1"));
    }

    #[test]
    fn test_membership_is_order_independent() {
        let forward = two_chains_and_an_orphan();
        let mut items = forward.items().to_vec();
        items.reverse();
        let mut edges = forward.edges().to_vec();
        edges.reverse();
        let backward = graph(items, edges);

        let a = ChainIndexer::default().index(&forward);
        let b = ChainIndexer::default().index(&backward);

        for chain in a.chains() {
            let other = b.get(&chain.key).unwrap();
            let mut left: Vec<_> = chain.members.iter().map(|m| &m.id).collect();
            let mut right: Vec<_> = other.members.iter().map(|m| &m.id).collect();
            left.sort();
            right.sort();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_synthetic_key_skips_member_labels() {
        let graph = graph(
            vec![
                LexicalItem::new("1", "chain_0", 3),
                LexicalItem::new("2", "가", 1),
                LexicalItem::new("3", "나", 2),
                LexicalItem::new("4", "다", 1),
            ],
            vec![
                AlternativeEdge::new("1", "2", 1),
                AlternativeEdge::new("3", "4", 1),
            ],
        );
        let index = ChainIndexer::default().index(&graph);

        assert_eq!(index.keys(), vec!["chain_0", "chain_1"]);
        assert!(index.get("chain_0").unwrap().contains_id("1"));
        assert!(!index.get("chain_0").unwrap().synthetic);
        assert!(index.get("chain_1").unwrap().contains_id("3"));
        assert!(index.get("chain_1").unwrap().synthetic);
    }

    #[test]
    fn test_synthetic_key_skips_labels_seen_later() {
        // The synthetic chain is discovered before the chain keyed "chain_0".
        let graph = graph(
            vec![
                LexicalItem::new("a", "나", 2),
                LexicalItem::new("b", "다", 1),
                LexicalItem::new("x", "chain_0", 3),
                LexicalItem::new("y", "가", 1),
            ],
            vec![
                AlternativeEdge::new("a", "b", 1),
                AlternativeEdge::new("x", "y", 1),
            ],
        );
        let index = ChainIndexer::default().index(&graph);

        assert_eq!(index.keys(), vec!["chain_1", "chain_0"]);
        assert!(index.get("chain_0").unwrap().contains_id("x"));
        assert!(index.get("chain_1").unwrap().contains_id("a"));
    }

    #[test]
    fn test_custom_key_difficulty() {
        let index = ChainIndexer::new(5).index(&two_chains_and_an_orphan());
        assert_eq!(index.keys(), vec!["chain_0", "chain_1"]);
    }

    #[test]
    fn test_monotonic_edges_inside_chains() {
        let graph = two_chains_and_an_orphan();
        let index = ChainIndexer::default().index(&graph);

        for chain in index.chains() {
            for edge in graph.edges().iter().filter(|e| chain.contains_id(&e.source)) {
                let source = graph.get(&edge.source).unwrap();
                let target = graph.get(&edge.target).unwrap();
                assert!(target.difficulty < source.difficulty);
                assert!(chain.contains_id(&target.id));
            }
        }
        assert_eq!(index.get("침수사고").unwrap().levels(), vec![1, 2, 3]);
    }
}
