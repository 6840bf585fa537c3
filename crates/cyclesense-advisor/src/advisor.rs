//! The end-to-end analysis pipeline.

use crate::{
    Predictions, RecommendationBundle, Symptom, UserObservation, aggregate, compose,
    extract_symptoms,
};
use cyclesense_core::Result;
use cyclesense_graph::FactGraph;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of one analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Human-readable advice text.
    pub advice: String,
    /// Everything the fact graph suggested.
    pub knowledge_graph_recommendations: RecommendationBundle,
    /// Symptoms extracted from the observation.
    pub symptoms_identified: Vec<Symptom>,
    /// Phase and onset estimates.
    pub predictions: Predictions,
}

/// Runs observations through extraction, aggregation, estimation, and
/// composition against a shared fact graph.
#[derive(Clone, Debug)]
pub struct Advisor {
    graph: Arc<FactGraph>,
}

impl Advisor {
    /// Creates an advisor over an already-built graph.
    pub fn new(graph: Arc<FactGraph>) -> Self {
        Self { graph }
    }

    /// Builds the fact graph and wraps it.
    pub fn load() -> Self {
        Self::new(Arc::new(FactGraph::build()))
    }

    /// The graph this advisor queries.
    pub fn graph(&self) -> &FactGraph {
        &self.graph
    }

    /// Analyzes one observation.
    ///
    /// Phase and flow labels are lower-cased before graph lookup. Fails only
    /// if the bundle names an id the graph does not contain.
    pub fn analyze(&self, observation: &UserObservation) -> Result<Analysis> {
        let symptoms = extract_symptoms(observation);
        let phase = observation.phase.to_lowercase();
        let flow = observation.flow_intensity.to_lowercase();

        let bundle = aggregate(&self.graph, &symptoms, &phase, &flow);
        bundle.verify(&self.graph)?;

        let predictions = Predictions::for_day(observation.day_in_cycle);
        let advice = compose(&bundle, &predictions);

        log::debug!(
            "Analyzed observation: {} symptom(s), {} medication(s), phase estimate {}",
            symptoms.len(),
            bundle.medications.len(),
            predictions.predicted_phase
        );

        Ok(Analysis {
            advice,
            knowledge_graph_recommendations: bundle,
            symptoms_identified: symptoms,
            predictions,
        })
    }
}
