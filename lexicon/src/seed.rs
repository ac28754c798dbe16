//! Built-in demonstration lexicon.
//!
//! Four chains of three tiers each, from news reporting on a flood
//! investigation: flooding accidents, the investigation lead, the
//! concessive "despite", and drainage systems. This data set is also the
//! fallback used when the primary store is unavailable.

use crate::edge::AlternativeEdge;
use crate::error::Result;
use crate::graph::{GraphSnapshot, LexicalGraph};
use crate::item::{Difficulty, LexicalItem};
use crate::provider::StaticGraph;

/// Name reported for the built-in data set.
pub const FALLBACK_NAME: &str = "builtin";

/// (id, label, part of speech, difficulty, domain, gloss)
const ITEMS: &[(&str, &str, &str, Difficulty, &str, &str)] = &[
    ("1", "침수사고", "명사", 3, "재난", "비나 물이 차서 곳이 물에 잠기는 사고"),
    ("2", "물에 잠기는 사고", "명사구", 2, "재난", "비나 물 때문에 장소가 물에 잠기는 일"),
    ("3", "물이 차서 생긴 사고", "명사구", 1, "재난", "물이 많이 들어와서 난 사고"),
    ("4", "조사단장", "명사", 3, "행정", "조사단의 책임자"),
    ("5", "조사팀 책임자", "명사구", 2, "행정", "조사하는 팀을 이끄는 사람"),
    ("6", "조사 책임자", "명사구", 1, "행정", "조사를 맡아 책임지는 사람"),
    ("7", "불구하고", "관용표현", 3, "문법", "그 상황인데도 어떤 일이 일어남"),
    ("8", "그런데도", "부사", 2, "문법", "그럼에도"),
    ("9", "그래도", "부사", 1, "문법", "그렇지만 여전히"),
    ("10", "배수시스템", "명사", 3, "재난", "물이 잘 빠지도록 만든 시설"),
    ("11", "물 빠지는 시설", "명사구", 2, "재난", "물이 고이지 않게 빠지는 장치가 있는 시설"),
    ("12", "물이 빠지게 하는 장치", "명사구", 1, "재난", "물을 밖으로 내보내는 장치"),
];

/// (source, target, rank)
const EDGES: &[(&str, &str, i64)] = &[
    ("1", "2", 1),
    ("2", "3", 2),
    ("4", "5", 1),
    ("5", "6", 2),
    ("7", "8", 1),
    ("8", "9", 2),
    ("10", "11", 1),
    ("11", "12", 2),
];

/// The built-in data set in serialisable form.
pub fn fallback_snapshot() -> GraphSnapshot {
    let nodes = ITEMS
        .iter()
        .map(|&(id, label, pos, difficulty, domain, gloss)| {
            LexicalItem::new(id, label, difficulty)
                .with_part_of_speech(pos)
                .with_domain(domain)
                .with_gloss(gloss)
        })
        .collect();
    let edges = EDGES
        .iter()
        .map(|&(source, target, rank)| AlternativeEdge::new(source, target, rank))
        .collect();

    GraphSnapshot::new(nodes, edges)
}

/// The built-in data set, validated.
pub fn fallback_graph() -> Result<LexicalGraph> {
    fallback_snapshot().into_graph()
}

/// A provider serving the built-in data set.
pub fn fallback_provider() -> Result<StaticGraph> {
    Ok(StaticGraph::new(FALLBACK_NAME, fallback_graph()?))
}
