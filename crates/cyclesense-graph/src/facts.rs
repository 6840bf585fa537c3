//! The hand-authored fact set.
//!
//! Typed nodes are added first so that edge insertion never downgrades a
//! vocabulary node to an untyped one.

use crate::{Edge, FactGraph, Node, NodeCategory, Relationship};

/// Typed vocabulary, grouped by category.
pub const VOCABULARY: &[(NodeCategory, &[&str])] = &[
    (
        NodeCategory::Phase,
        &["follicular", "ovulatory", "luteal", "menstrual"],
    ),
    (
        NodeCategory::Symptom,
        &["cramps", "headache", "fatigue", "bloating", "mood_swings"],
    ),
    (
        NodeCategory::HygieneProduct,
        &["pad", "tampon", "menstrual_cup", "period_underwear"],
    ),
    (
        NodeCategory::Medication,
        &["ibuprofen", "naproxen", "paracetamol"],
    ),
    (
        NodeCategory::Lifestyle,
        &["exercise", "nutrition", "sleep", "stress_management"],
    ),
];

/// Fact edges as `(from, to, relationship)`, in insertion order.
pub const FACTS: &[(&str, &str, Relationship)] = &[
    // Phase characteristics and common symptoms
    ("follicular", "high_energy", Relationship::PhaseCharacteristic),
    ("ovulatory", "fertile_mucus", Relationship::PhaseCharacteristic),
    ("luteal", "mood_swings", Relationship::CommonSymptom),
    ("luteal", "bloating", Relationship::CommonSymptom),
    ("menstrual", "cramps", Relationship::CommonSymptom),
    ("menstrual", "fatigue", Relationship::CommonSymptom),
    // Symptom -> medication
    ("cramps", "ibuprofen", Relationship::IndicatedFor),
    ("cramps", "naproxen", Relationship::IndicatedFor),
    ("headache", "paracetamol", Relationship::IndicatedFor),
    // Flow -> hygiene product
    ("light_flow", "pad", Relationship::RecommendedFor),
    ("light_flow", "period_underwear", Relationship::RecommendedFor),
    ("moderate_flow", "tampon", Relationship::RecommendedFor),
    ("heavy_flow", "menstrual_cup", Relationship::RecommendedFor),
    // Symptom -> lifestyle
    ("cramps", "exercise", Relationship::RelievedBy),
    ("bloating", "nutrition", Relationship::ManagedBy),
    ("fatigue", "sleep", Relationship::ImprovedBy),
    ("mood_swings", "stress_management", Relationship::ManagedBy),
];

impl FactGraph {
    /// Builds the fixed fact graph.
    ///
    /// Deterministic: every call yields the same nodes and edges in the same
    /// order.
    pub fn build() -> Self {
        let mut graph = FactGraph::empty();

        for (category, ids) in VOCABULARY {
            for id in *ids {
                graph.insert_node(Node::new(*id, *category));
            }
        }

        for (from, to, relationship) in FACTS {
            graph.insert_edge(Edge::new(*from, *to, *relationship));
        }

        log::info!(
            "Fact graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let graph = FactGraph::build();
        // 20 typed nodes + 3 flow levels + 2 phase characteristics
        assert_eq!(graph.node_count(), 25);
        assert_eq!(graph.edge_count(), 17);
        assert_eq!(graph.stats().untyped_nodes, 5);
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = FactGraph::build();
        let b = FactGraph::build();

        let nodes_a: Vec<&Node> = a.nodes().collect();
        let nodes_b: Vec<&Node> = b.nodes().collect();
        assert_eq!(nodes_a, nodes_b);

        let edges_a: Vec<&Edge> = a.edges().collect();
        let edges_b: Vec<&Edge> = b.edges().collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_vocabulary_nodes_keep_category() {
        let graph = FactGraph::build();
        for (category, ids) in VOCABULARY {
            for id in *ids {
                assert_eq!(graph.get_node(id).unwrap().category, Some(*category), "{id}");
            }
        }
    }

    #[test]
    fn test_flow_nodes_exist_untyped() {
        let graph = FactGraph::build();
        for id in ["light_flow", "moderate_flow", "heavy_flow"] {
            let node = graph.get_node(id).unwrap();
            assert!(node.category.is_none());
        }
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let graph = FactGraph::build();
        assert!(graph.contains_node("menstrual"));
        assert!(!graph.contains_node("Menstrual"));
    }

    #[test]
    fn test_cramps_adjacency() {
        let graph = FactGraph::build();
        let edges: Vec<(&str, Relationship)> = graph
            .edges_from("cramps", None)
            .map(|(node, rel)| (node.id.as_str(), rel))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("ibuprofen", Relationship::IndicatedFor),
                ("naproxen", Relationship::IndicatedFor),
                ("exercise", Relationship::RelievedBy),
            ]
        );
    }

    #[test]
    fn test_every_fact_endpoint_is_a_node() {
        let graph = FactGraph::build();
        for (from, to, _) in FACTS {
            assert!(graph.contains_node(from));
            assert!(graph.contains_node(to));
        }
    }
}
