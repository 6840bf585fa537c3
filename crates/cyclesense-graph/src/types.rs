//! Node and edge types for the fact graph.
//!
//! The vocabulary is closed: every relationship the graph encodes is a
//! variant of [`Relationship`], and every typed node belongs to one
//! [`NodeCategory`].

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NodeCategory enum
// ============================================================================

/// Category tag of a typed node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// A menstrual-cycle phase.
    Phase,
    /// A self-reported symptom.
    Symptom,
    /// A hygiene product.
    HygieneProduct,
    /// An over-the-counter medication.
    Medication,
    /// A lifestyle action.
    Lifestyle,
}

impl NodeCategory {
    /// All categories in vocabulary order.
    pub const ALL: [NodeCategory; 5] = [
        Self::Phase,
        Self::Symptom,
        Self::HygieneProduct,
        Self::Medication,
        Self::Lifestyle,
    ];

    /// Returns the category name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phase => "phase",
            Self::Symptom => "symptom",
            Self::HygieneProduct => "hygiene_product",
            Self::Medication => "medication",
            Self::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Relationship enum
// ============================================================================

/// Relationship types for graph edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Phase A is characterised by B.
    PhaseCharacteristic,
    /// Symptom B commonly occurs during phase A.
    CommonSymptom,
    /// Medication B is indicated for symptom A.
    IndicatedFor,
    /// Product B is recommended for flow A.
    RecommendedFor,
    /// Symptom A is relieved by B.
    RelievedBy,
    /// Symptom A is managed by B.
    ManagedBy,
    /// Symptom A is improved by B.
    ImprovedBy,
}

impl Relationship {
    /// Weight given to every fact edge. Carried for completeness; queries
    /// only look at edge presence.
    pub const DEFAULT_WEIGHT: f32 = 1.0;

    /// Returns the relationship tag as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhaseCharacteristic => "phase_characteristic",
            Self::CommonSymptom => "common_symptom",
            Self::IndicatedFor => "indicated_for",
            Self::RecommendedFor => "recommended_for",
            Self::RelievedBy => "relieved_by",
            Self::ManagedBy => "managed_by",
            Self::ImprovedBy => "improved_by",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Node struct
// ============================================================================

/// A node in the fact graph.
///
/// Nodes created implicitly as edge endpoints (flow levels, phase
/// characteristics) have no category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique, case-sensitive identifier (e.g. "cramps", "heavy_flow").
    pub id: String,
    /// Category, when the node is part of the typed vocabulary.
    pub category: Option<NodeCategory>,
}

impl Node {
    /// Creates a typed node.
    pub fn new(id: impl Into<String>, category: NodeCategory) -> Self {
        Self {
            id: id.into(),
            category: Some(category),
        }
    }

    /// Creates a node with no category.
    pub fn untyped(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: None,
        }
    }
}

// ============================================================================
// Edge struct
// ============================================================================

/// A directed, typed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID.
    pub from: String,
    /// Target node ID.
    pub to: String,
    /// Type of relationship.
    pub relationship: Relationship,
    /// Edge weight.
    pub weight: f32,
}

impl Edge {
    /// Creates an edge with [`Relationship::DEFAULT_WEIGHT`].
    pub fn new(from: impl Into<String>, to: impl Into<String>, relationship: Relationship) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relationship,
            weight: Relationship::DEFAULT_WEIGHT,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_names_match_serde() {
        let all = [
            Relationship::PhaseCharacteristic,
            Relationship::CommonSymptom,
            Relationship::IndicatedFor,
            Relationship::RecommendedFor,
            Relationship::RelievedBy,
            Relationship::ManagedBy,
            Relationship::ImprovedBy,
        ];
        for rel in all {
            let json = serde_json::to_string(&rel).unwrap();
            assert_eq!(json, format!("\"{}\"", rel.name()));
        }
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&NodeCategory::HygieneProduct).unwrap();
        assert_eq!(json, "\"hygiene_product\"");
        assert_eq!(NodeCategory::HygieneProduct.to_string(), "hygiene_product");
    }

    #[test]
    fn test_node_constructors() {
        let typed = Node::new("pad", NodeCategory::HygieneProduct);
        assert_eq!(typed.category, Some(NodeCategory::HygieneProduct));

        let untyped = Node::untyped("heavy_flow");
        assert_eq!(untyped.id, "heavy_flow");
        assert!(untyped.category.is_none());
    }

    #[test]
    fn test_edge_default_weight() {
        let edge = Edge::new("cramps", "ibuprofen", Relationship::IndicatedFor);
        assert_eq!(edge.weight, 1.0);
        assert_eq!(edge.relationship.to_string(), "indicated_for");
    }
}
