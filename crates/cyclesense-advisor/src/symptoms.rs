//! Symptom extraction from a raw observation.

use crate::UserObservation;
use crate::observation::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pain score at or above which cramps are reported.
pub const CRAMPS_PAIN_THRESHOLD: i64 = 3;

/// A symptom tag. [`Symptom::as_str`] is its fact-graph node id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    /// Menstrual cramps.
    Cramps,
    /// Headache.
    Headache,
    /// Fatigue.
    Fatigue,
    /// Bloating.
    Bloating,
    /// Mood swings. In the graph vocabulary but never extracted from a form.
    MoodSwings,
}

impl Symptom {
    /// Node id in the fact graph.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cramps => "cramps",
            Self::Headache => "headache",
            Self::Fatigue => "fatigue",
            Self::Bloating => "bloating",
            Self::MoodSwings => "mood_swings",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an observation to the symptoms it indicates.
///
/// Rules run in a fixed order (pain, headaches, fatigue, bloating) and the
/// output keeps that order. Each rule fires at most once.
pub fn extract_symptoms(observation: &UserObservation) -> Vec<Symptom> {
    let mut symptoms = Vec::with_capacity(4);

    if observation.pain_level >= CRAMPS_PAIN_THRESHOLD {
        symptoms.push(Symptom::Cramps);
    }

    let levels = [
        ("headaches", &observation.headaches, Symptom::Headache),
        ("fatigue", &observation.fatigue, Symptom::Fatigue),
        ("bloating", &observation.bloating, Symptom::Bloating),
    ];
    for (field, level, symptom) in levels {
        if let Severity::Unrecognized(label) = level {
            log::debug!("Ignoring unrecognized {field} level {label:?}");
        }
        if level.is_significant() {
            symptoms.push(symptom);
        }
    }

    symptoms
}
