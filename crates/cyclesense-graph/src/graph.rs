//! The read-only fact graph and its adjacency queries.
//!
//! Wraps a petgraph `DiGraph`, which keeps parallel edges, with an
//! id → `NodeIndex` lookup table. Mutation is crate-private: the only way to
//! obtain a populated graph is [`FactGraph::build`](crate::FactGraph::build).

use crate::{Edge, Node, NodeCategory, Relationship};
use cyclesense_core::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed multigraph of menstrual-health facts.
#[derive(Clone, Debug)]
pub struct FactGraph {
    graph: DiGraph<Node, Edge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl FactGraph {
    pub(crate) fn empty() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Adds a node, or returns the index of the node already using its id.
    pub(crate) fn insert_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&existing) = self.node_indices.get(&node.id) {
            return existing;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id, idx);
        idx
    }

    /// Adds an edge, creating untyped endpoint nodes that do not exist yet.
    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        let from = self.insert_node(Node::untyped(edge.from.as_str()));
        let to = self.insert_node(Node::untyped(edge.to.as_str()));
        self.graph.add_edge(from, to, edge);
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if a node exists. Exact, case-sensitive match.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Gets a node by ID.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Gets a node by ID, failing with [`Error::NodeNotFound`].
    pub fn require_node(&self, id: &str) -> Result<&Node> {
        self.get_node(id).ok_or_else(|| Error::node_not_found(id))
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Outgoing edges of `id` as `(target, relationship)` pairs.
    ///
    /// Pairs come out lazily in the order the edges were inserted. When
    /// `filter` is given, only edges whose relationship it contains are
    /// yielded. An unknown node yields nothing.
    pub fn edges_from<'g>(
        &'g self,
        id: &str,
        filter: Option<&'g [Relationship]>,
    ) -> impl Iterator<Item = (&'g Node, Relationship)> + use<'g> {
        let source = self.node_indices.get(id).copied();
        // The raw edge list is in index order; petgraph's per-node adjacency
        // walk is newest first.
        self.graph
            .raw_edges()
            .iter()
            .filter(move |edge| source == Some(edge.source()))
            .filter(move |edge| {
                filter.is_none_or(|rels| rels.contains(&edge.weight.relationship))
            })
            .map(move |edge| (&self.graph[edge.target()], edge.weight.relationship))
    }

    /// Summary counts for display.
    pub fn stats(&self) -> GraphStats {
        let mut by_category: Vec<(NodeCategory, usize)> =
            NodeCategory::ALL.iter().map(|&category| (category, 0)).collect();
        let mut untyped_nodes = 0;
        for node in self.nodes() {
            match node.category {
                Some(category) => bump(&mut by_category, category),
                None => untyped_nodes += 1,
            }
        }

        let mut by_relationship: Vec<(Relationship, usize)> = Vec::new();
        for edge in self.edges() {
            bump(&mut by_relationship, edge.relationship);
        }

        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            untyped_nodes,
            by_category,
            by_relationship,
        }
    }
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}

/// Node and edge counts. Categories follow [`NodeCategory::ALL`];
/// relationships appear in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStats {
    /// Total nodes.
    pub node_count: usize,
    /// Total edges.
    pub edge_count: usize,
    /// Nodes with no category.
    pub untyped_nodes: usize,
    /// Typed node counts for every category, zeros included.
    pub by_category: Vec<(NodeCategory, usize)>,
    /// Edge counts per relationship.
    pub by_relationship: Vec<(Relationship, usize)>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> FactGraph {
        let mut graph = FactGraph::empty();
        graph.insert_node(Node::new("cramps", NodeCategory::Symptom));
        graph.insert_node(Node::new("ibuprofen", NodeCategory::Medication));
        graph.insert_node(Node::new("naproxen", NodeCategory::Medication));
        graph.insert_node(Node::new("exercise", NodeCategory::Lifestyle));
        graph.insert_edge(Edge::new("cramps", "ibuprofen", Relationship::IndicatedFor));
        graph.insert_edge(Edge::new("cramps", "exercise", Relationship::RelievedBy));
        graph.insert_edge(Edge::new("cramps", "naproxen", Relationship::IndicatedFor));
        graph
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_insert_node_duplicate_returns_existing() {
        let mut graph = FactGraph::empty();
        let a = graph.insert_node(Node::new("pad", NodeCategory::HygieneProduct));
        let b = graph.insert_node(Node::untyped("pad"));
        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(
            graph.get_node("pad").unwrap().category,
            Some(NodeCategory::HygieneProduct)
        );
    }

    #[test]
    fn test_insert_edge_creates_untyped_endpoints() {
        let mut graph = FactGraph::empty();
        graph.insert_edge(Edge::new("heavy_flow", "menstrual_cup", Relationship::RecommendedFor));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.get_node("heavy_flow").unwrap().category.is_none());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = FactGraph::empty();
        graph.insert_edge(Edge::new("a", "b", Relationship::ManagedBy));
        graph.insert_edge(Edge::new("a", "b", Relationship::ManagedBy));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_from("a", None).count(), 2);
    }

    // ------------------------------------------------------------------------
    // edges_from
    // ------------------------------------------------------------------------

    #[test]
    fn test_edges_from_insertion_order() {
        let graph = small_graph();
        let targets: Vec<&str> = graph
            .edges_from("cramps", None)
            .map(|(node, _)| node.id.as_str())
            .collect();
        assert_eq!(targets, vec!["ibuprofen", "exercise", "naproxen"]);
    }

    #[test]
    fn test_edges_from_interleaved_sources() {
        let mut graph = FactGraph::empty();
        graph.insert_edge(Edge::new("bloating", "hydration", Relationship::ManagedBy));
        graph.insert_edge(Edge::new("fatigue", "sleep", Relationship::ImprovedBy));
        graph.insert_edge(Edge::new("bloating", "salt", Relationship::ManagedBy));
        graph.insert_edge(Edge::new("fatigue", "iron", Relationship::ImprovedBy));
        graph.insert_edge(Edge::new("bloating", "walking", Relationship::ManagedBy));

        let targets: Vec<&str> = graph
            .edges_from("bloating", None)
            .map(|(node, _)| node.id.as_str())
            .collect();
        assert_eq!(targets, vec!["hydration", "salt", "walking"]);
    }

    #[test]
    fn test_edges_from_filter() {
        let graph = small_graph();
        let meds: Vec<&str> = graph
            .edges_from("cramps", Some(&[Relationship::IndicatedFor]))
            .map(|(node, _)| node.id.as_str())
            .collect();
        assert_eq!(meds, vec!["ibuprofen", "naproxen"]);
    }

    #[test]
    fn test_edges_from_unknown_node_is_empty() {
        let graph = small_graph();
        assert_eq!(graph.edges_from("migraine", None).count(), 0);
        assert_eq!(graph.edges_from("Cramps", None).count(), 0);
    }

    #[test]
    fn test_edges_from_no_matching_relationship() {
        let graph = small_graph();
        let none = graph.edges_from("cramps", Some(&[Relationship::CommonSymptom]));
        assert_eq!(none.count(), 0);
    }

    #[test]
    fn test_edges_from_temporary_id() {
        let graph = small_graph();
        let iter = graph.edges_from(&"cramps".to_string(), None);
        assert_eq!(iter.count(), 3);
    }

    // ------------------------------------------------------------------------
    // Lookups and stats
    // ------------------------------------------------------------------------

    #[test]
    fn test_require_node() {
        let graph = small_graph();
        assert!(graph.require_node("ibuprofen").is_ok());
        let err = graph.require_node("aspirin").unwrap_err();
        assert!(matches!(err, Error::NodeNotFound { .. }));
    }

    #[test]
    fn test_stats() {
        let stats = small_graph().stats();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.untyped_nodes, 0);
        assert_eq!(
            stats.by_category,
            vec![
                (NodeCategory::Phase, 0),
                (NodeCategory::Symptom, 1),
                (NodeCategory::HygieneProduct, 0),
                (NodeCategory::Medication, 2),
                (NodeCategory::Lifestyle, 1),
            ]
        );
        assert_eq!(
            stats.by_relationship,
            vec![(Relationship::IndicatedFor, 2), (Relationship::RelievedBy, 1)]
        );
    }
}
