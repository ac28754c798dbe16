//! Directed "easier alternative" relations between lexical items.

use serde::{Deserialize, Serialize};

/// A directed relation: `target` is an easier way to express `source`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlternativeEdge {
    /// Id of the harder item.
    pub source: String,

    /// Id of the easier item.
    pub target: String,

    /// Position along the chain, hardest to easiest. Not required to be
    /// contiguous or to start at 1.
    #[serde(default)]
    pub rank: i64,

    /// Kind of relation.
    #[serde(rename = "type", default)]
    pub relation_kind: RelationKind,
}

impl AlternativeEdge {
    /// Create an `EASIER_ALTERNATIVE` edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>, rank: i64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rank,
            relation_kind: RelationKind::EasierAlternative,
        }
    }

    /// Whether the edge touches the given item id at either end.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite to `id`, if the edge touches `id`.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Get a string representation of this edge.
    pub fn to_string_repr(&self) -> String {
        format!(
            "{} --[{}:{}]--> {}",
            self.source,
            self.relation_kind.as_str(),
            self.rank,
            self.target
        )
    }
}

/// Kind of relation between lexical items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Target is an easier way to express source.
    #[default]
    #[serde(rename = "EASIER_ALTERNATIVE")]
    EasierAlternative,
}

impl RelationKind {
    /// Get a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EasierAlternative => "EASIER_ALTERNATIVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_other_end() {
        let edge = AlternativeEdge::new("4", "5", 1);
        assert_eq!(edge.other_end("4"), Some("5"));
        assert_eq!(edge.other_end("5"), Some("4"));
        assert_eq!(edge.other_end("6"), None);
        assert!(edge.touches("5"));
    }

    #[test]
    fn test_edge_wire_format() {
        let edge: AlternativeEdge = serde_json::from_str(
            r#"{"source":"1","target":"2","rank":1,"type":"EASIER_ALTERNATIVE"}"#,
        )
        .unwrap();
        assert_eq!(edge, AlternativeEdge::new("1", "2", 1));
        assert_eq!(edge.to_string_repr(), "1 --[EASIER_ALTERNATIVE:1]--> 2");
    }

    #[test]
    fn test_unknown_relation_kind_rejected() {
        let parsed = serde_json::from_str::<AlternativeEdge>(
            r#"{"source":"1","target":"2","rank":1,"type":"SYNONYM"}"#,
        );
        assert!(parsed.is_err());
    }
}
