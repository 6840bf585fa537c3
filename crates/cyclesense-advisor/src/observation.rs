//! The per-request observation record.
//!
//! Field names and defaults follow the analysis form, so the same type is
//! decoded straight from a request body and echoed back in history.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Severity
// ============================================================================

/// A categorical symptom level as reported by the user.
///
/// Parsing is exact and case-sensitive. Values outside the known vocabulary
/// are kept as [`Severity::Unrecognized`] rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// "None"
    None,
    /// "Low"
    Low,
    /// "Medium"
    #[default]
    Medium,
    /// "High"
    High,
    /// "Very High"
    VeryHigh,
    /// Anything else, verbatim.
    Unrecognized(String),
}

impl Severity {
    /// Parses a level label. Never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "None" => Self::None,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Very High" => Self::VeryHigh,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The label this level was parsed from.
    pub fn label(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Unrecognized(label) => label,
        }
    }

    /// Whether the level is high enough to count as a symptom.
    pub fn is_significant(&self) -> bool {
        matches!(self, Self::Medium | Self::High | Self::VeryHigh)
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.label().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// UserObservation
// ============================================================================

/// What the user reported for one analysis request.
///
/// Only `phase` and `pain_level` are required; everything else has a default.
/// `day_in_cycle` is not range-checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserObservation {
    /// Self-reported cycle phase label, any case.
    pub phase: String,
    /// Pain on a 0–10 numeric rating scale.
    pub pain_level: i64,
    /// Flow label: light, moderate or heavy, any case.
    #[serde(default = "default_flow_intensity")]
    pub flow_intensity: String,
    /// Free-text mood.
    #[serde(default = "default_mood")]
    pub mood: String,
    /// Hours slept last night.
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    /// Fatigue level.
    #[serde(default)]
    pub fatigue: Severity,
    /// Headache level.
    #[serde(default)]
    pub headaches: Severity,
    /// Bloating level.
    #[serde(default)]
    pub bloating: Severity,
    /// Day within the current cycle, 1-based.
    #[serde(default = "default_day_in_cycle")]
    pub day_in_cycle: i64,
    /// Age in years.
    #[serde(default = "default_age")]
    pub age: i64,
    /// Contraception in use.
    #[serde(default = "default_contraception_type")]
    pub contraception_type: String,
}

fn default_flow_intensity() -> String {
    "moderate".to_string()
}

fn default_mood() -> String {
    "N/A".to_string()
}

fn default_sleep_hours() -> f64 {
    7.0
}

fn default_day_in_cycle() -> i64 {
    15
}

fn default_age() -> i64 {
    25
}

fn default_contraception_type() -> String {
    "None".to_string()
}

impl UserObservation {
    /// An observation with the two required fields and all defaults.
    pub fn new(phase: impl Into<String>, pain_level: i64) -> Self {
        Self {
            phase: phase.into(),
            pain_level,
            flow_intensity: default_flow_intensity(),
            mood: default_mood(),
            sleep_hours: default_sleep_hours(),
            fatigue: Severity::default(),
            headaches: Severity::default(),
            bloating: Severity::default(),
            day_in_cycle: default_day_in_cycle(),
            age: default_age(),
            contraception_type: default_contraception_type(),
        }
    }

    /// Sets the flow label.
    pub fn with_flow(mut self, flow: impl Into<String>) -> Self {
        self.flow_intensity = flow.into();
        self
    }

    /// Sets fatigue, headache, and bloating levels.
    pub fn with_levels(
        mut self,
        fatigue: impl Into<Severity>,
        headaches: impl Into<Severity>,
        bloating: impl Into<Severity>,
    ) -> Self {
        self.fatigue = fatigue.into();
        self.headaches = headaches.into();
        self.bloating = bloating.into();
        self
    }

    /// Sets the cycle day.
    pub fn with_day(mut self, day_in_cycle: i64) -> Self {
        self.day_in_cycle = day_in_cycle;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_known() {
        assert_eq!(Severity::parse("None"), Severity::None);
        assert_eq!(Severity::parse("Low"), Severity::Low);
        assert_eq!(Severity::parse("Medium"), Severity::Medium);
        assert_eq!(Severity::parse("High"), Severity::High);
        assert_eq!(Severity::parse("Very High"), Severity::VeryHigh);
    }

    #[test]
    fn test_severity_parse_is_case_sensitive() {
        assert_eq!(
            Severity::parse("high"),
            Severity::Unrecognized("high".to_string())
        );
        assert!(!Severity::parse("very high").is_significant());
    }

    #[test]
    fn test_severity_significance() {
        assert!(!Severity::None.is_significant());
        assert!(!Severity::Low.is_significant());
        assert!(Severity::Medium.is_significant());
        assert!(Severity::High.is_significant());
        assert!(Severity::VeryHigh.is_significant());
        assert!(!Severity::Unrecognized("Severe".into()).is_significant());
    }

    #[test]
    fn test_severity_serializes_as_label() {
        let json = serde_json::to_string(&Severity::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        let odd: Severity = serde_json::from_str("\"Extreme\"").unwrap();
        assert_eq!(odd.label(), "Extreme");
    }

    #[test]
    fn test_observation_defaults_from_json() {
        let obs: UserObservation =
            serde_json::from_str(r#"{"phase": "Luteal", "pain_level": 4}"#).unwrap();
        assert_eq!(obs, UserObservation::new("Luteal", 4));
        assert_eq!(obs.flow_intensity, "moderate");
        assert_eq!(obs.mood, "N/A");
        assert_eq!(obs.sleep_hours, 7.0);
        assert_eq!(obs.fatigue, Severity::Medium);
        assert_eq!(obs.day_in_cycle, 15);
        assert_eq!(obs.age, 25);
        assert_eq!(obs.contraception_type, "None");
    }

    #[test]
    fn test_observation_requires_pain_level() {
        let result = serde_json::from_str::<UserObservation>(r#"{"phase": "Luteal"}"#);
        assert!(result.is_err());
    }
}
