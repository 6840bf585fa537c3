//! Recommendation aggregation over the fact graph.
//!
//! Three independent walks (symptom, phase, flow) feed one
//! [`RecommendationBundle`]. Lists keep first-discovery order and never hold
//! duplicates; result sizes are tiny, so membership is a linear scan of the
//! list being built.

use crate::Symptom;
use cyclesense_core::Result;
use cyclesense_graph::{FactGraph, Relationship};
use serde::{Deserialize, Serialize};

/// Medications suggested when symptoms were found but none maps to a drug.
pub const FALLBACK_MEDICATIONS: [&str; 2] = ["ibuprofen", "paracetamol"];

/// Products suggested when the flow label maps to nothing.
pub const FALLBACK_HYGIENE_PRODUCTS: [&str; 2] = ["pad", "tampon"];

const MEDICATION_RELATIONSHIPS: &[Relationship] = &[Relationship::IndicatedFor];

const LIFESTYLE_RELATIONSHIPS: &[Relationship] = &[
    Relationship::RelievedBy,
    Relationship::ManagedBy,
    Relationship::ImprovedBy,
];

const PHASE_RELATIONSHIPS: &[Relationship] = &[
    Relationship::PhaseCharacteristic,
    Relationship::CommonSymptom,
];

const FLOW_RELATIONSHIPS: &[Relationship] = &[Relationship::RecommendedFor];

/// Aggregated suggestions for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Medication node ids.
    pub medications: Vec<String>,
    /// Hygiene product node ids.
    pub hygiene_products: Vec<String>,
    /// "For {symptom}: {relationship} with {target}" lines.
    pub lifestyle_tips: Vec<String>,
    /// "During {phase} phase: {target}" lines.
    pub phase_specific: Vec<String>,
    /// The symptoms the bundle was built from.
    pub symptoms_identified: Vec<Symptom>,
}

impl RecommendationBundle {
    /// Checks that every medication and hygiene id is a node of `graph`.
    pub fn verify(&self, graph: &FactGraph) -> Result<()> {
        for id in self.medications.iter().chain(&self.hygiene_products) {
            graph.require_node(id)?;
        }
        Ok(())
    }
}

/// Builds a bundle from symptoms, a phase label, and a flow label.
///
/// `phase` and `flow` are matched exactly against node ids, so callers
/// lower-case them first. The flow node id is `"{flow}_flow"`.
pub fn aggregate(
    graph: &FactGraph,
    symptoms: &[Symptom],
    phase: &str,
    flow: &str,
) -> RecommendationBundle {
    let mut bundle = RecommendationBundle {
        symptoms_identified: symptoms.to_vec(),
        ..Default::default()
    };

    for symptom in symptoms {
        for (target, _) in graph.edges_from(symptom.as_str(), Some(MEDICATION_RELATIONSHIPS)) {
            push_unique(&mut bundle.medications, &target.id);
        }
        for (target, relationship) in
            graph.edges_from(symptom.as_str(), Some(LIFESTYLE_RELATIONSHIPS))
        {
            let tip = format!("For {symptom}: {relationship} with {}", target.id);
            push_unique(&mut bundle.lifestyle_tips, &tip);
        }
    }

    if graph.contains_node(phase) {
        for (target, _) in graph.edges_from(phase, Some(PHASE_RELATIONSHIPS)) {
            let insight = format!("During {phase} phase: {}", target.id);
            push_unique(&mut bundle.phase_specific, &insight);
        }
    }

    let flow_node = format!("{flow}_flow");
    if graph.contains_node(&flow_node) {
        for (target, _) in graph.edges_from(&flow_node, Some(FLOW_RELATIONSHIPS)) {
            push_unique(&mut bundle.hygiene_products, &target.id);
        }
    }

    if bundle.medications.is_empty() && !symptoms.is_empty() {
        bundle.medications = FALLBACK_MEDICATIONS.map(String::from).to_vec();
    }
    if bundle.hygiene_products.is_empty() {
        bundle.hygiene_products = FALLBACK_HYGIENE_PRODUCTS.map(String::from).to_vec();
    }

    bundle
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
