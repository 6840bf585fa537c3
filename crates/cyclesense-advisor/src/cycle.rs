//! Cycle phase and next-onset estimation from the day in cycle.
//!
//! Both estimators are total over `i64`. Out-of-range days (zero, negative,
//! past the cycle length) are not rejected: they fall into the first or last
//! phase and the onset clamps to one day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assumed cycle length.
pub const CYCLE_LENGTH_DAYS: i64 = 28;

/// A menstrual-cycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Days 1–5.
    Menstrual,
    /// Days 6–13.
    Follicular,
    /// Days 14–15.
    Ovulatory,
    /// Day 16 onward.
    Luteal,
}

impl Phase {
    /// Lower-case label, also the fact-graph node id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menstrual => "menstrual",
            Self::Follicular => "follicular",
            Self::Ovulatory => "ovulatory",
            Self::Luteal => "luteal",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase for a given cycle day.
pub fn estimate_phase(day_in_cycle: i64) -> Phase {
    match day_in_cycle {
        ..=5 => Phase::Menstrual,
        6..=13 => Phase::Follicular,
        14..=15 => Phase::Ovulatory,
        _ => Phase::Luteal,
    }
}

/// Days until the next period starts; never less than one.
pub fn estimate_onset(day_in_cycle: i64) -> i64 {
    CYCLE_LENGTH_DAYS.saturating_sub(day_in_cycle).max(1)
}

/// Both estimates for one cycle day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predictions {
    /// See [`estimate_onset`].
    pub next_period_in_days: i64,
    /// See [`estimate_phase`].
    pub predicted_phase: Phase,
}

impl Predictions {
    /// Runs both estimators.
    pub fn for_day(day_in_cycle: i64) -> Self {
        Self {
            next_period_in_days: estimate_onset(day_in_cycle),
            predicted_phase: estimate_phase(day_in_cycle),
        }
    }
}
