//! Cyclesense advisor: from a user observation to advice text.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`extract_symptoms`] turns pain and categorical levels into symptom tags
//! 2. [`aggregate`] walks the fact graph along symptom, phase, and flow axes
//! 3. [`estimate_phase`] / [`estimate_onset`] derive cycle predictions
//! 4. [`compose`] renders everything as text
//!
//! [`Advisor`] runs all four against a shared [`FactGraph`](cyclesense_graph::FactGraph).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod advice;
pub mod advisor;
pub mod cycle;
pub mod observation;
pub mod recommend;
pub mod symptoms;

mod proptests;

pub use advice::compose;
pub use advisor::{Advisor, Analysis};
pub use cycle::{CYCLE_LENGTH_DAYS, Phase, Predictions, estimate_onset, estimate_phase};
pub use observation::{Severity, UserObservation};
pub use recommend::{RecommendationBundle, aggregate};
pub use symptoms::{Symptom, extract_symptoms};
