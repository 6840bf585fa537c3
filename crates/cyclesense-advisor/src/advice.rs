//! Plain-text advice composed from a bundle and predictions.

use crate::{Predictions, RecommendationBundle};

const HEADER: &str =
    "Based on your symptoms and menstrual phase, here are personalized recommendations:\n";

const MAX_LIFESTYLE_TIPS: usize = 3;
const MAX_PHASE_INSIGHTS: usize = 2;

const WELLNESS_TIPS: [&str; 4] = [
    "Stay hydrated and maintain a balanced diet",
    "Get 7-9 hours of quality sleep nightly",
    "Gentle exercise can reduce symptoms",
    "Track your cycle to understand patterns",
];

/// Renders the advice text.
///
/// Section order is fixed. List sections are skipped when empty; the
/// prediction and wellness sections are always present.
pub fn compose(bundle: &RecommendationBundle, predictions: &Predictions) -> String {
    let mut lines: Vec<String> = vec![HEADER.to_string()];

    if !bundle.medications.is_empty() {
        lines.push(format!(
            "💊 **Medication Options**: {}",
            bundle.medications.join(", ")
        ));
    }

    if !bundle.hygiene_products.is_empty() {
        lines.push(format!(
            "🩸 **Hygiene Products**: {}",
            bundle.hygiene_products.join(", ")
        ));
    }

    if !bundle.lifestyle_tips.is_empty() {
        lines.push("🏃 **Lifestyle Tips**:".to_string());
        lines.extend(
            bundle
                .lifestyle_tips
                .iter()
                .take(MAX_LIFESTYLE_TIPS)
                .map(|tip| bullet(tip)),
        );
    }

    if !bundle.phase_specific.is_empty() {
        lines.push("📅 **Phase Insights**:".to_string());
        lines.extend(
            bundle
                .phase_specific
                .iter()
                .take(MAX_PHASE_INSIGHTS)
                .map(|insight| bullet(insight)),
        );
    }

    if !bundle.symptoms_identified.is_empty() {
        let symptoms: Vec<&str> = bundle
            .symptoms_identified
            .iter()
            .map(|s| s.as_str())
            .collect();
        lines.push(format!("🎯 **Symptoms Addressed**: {}", symptoms.join(", ")));
    }

    lines.push("📊 **Cycle Predictions**:".to_string());
    lines.push(bullet(&format!(
        "Next period in approximately {} days",
        predictions.next_period_in_days
    )));
    lines.push(bullet(&format!(
        "Likely entering {} phase soon",
        predictions.predicted_phase
    )));

    lines.push("\n💡 **General Wellness Tips**:".to_string());
    lines.extend(WELLNESS_TIPS.iter().map(|tip| bullet(tip)));

    lines.join("\n")
}

fn bullet(text: &str) -> String {
    format!("   • {text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, Symptom};

    fn predictions() -> Predictions {
        Predictions {
            next_period_in_days: 8,
            predicted_phase: Phase::Luteal,
        }
    }

    fn full_bundle() -> RecommendationBundle {
        RecommendationBundle {
            medications: vec!["ibuprofen".into(), "naproxen".into()],
            hygiene_products: vec!["menstrual_cup".into()],
            lifestyle_tips: vec![
                "tip one".into(),
                "tip two".into(),
                "tip three".into(),
                "tip four".into(),
            ],
            phase_specific: vec!["insight one".into(), "insight two".into(), "insight three".into()],
            symptoms_identified: vec![Symptom::Cramps, Symptom::Fatigue],
        }
    }

    #[test]
    fn test_full_sections_in_order() {
        let text = compose(&full_bundle(), &predictions());

        let order = [
            "Based on your symptoms",
            "**Medication Options**: ibuprofen, naproxen",
            "**Hygiene Products**: menstrual_cup",
            "**Lifestyle Tips**:",
            "**Phase Insights**:",
            "**Symptoms Addressed**: cramps, fatigue",
            "**Cycle Predictions**:",
            "**General Wellness Tips**:",
        ];
        let mut last = 0;
        for marker in order {
            let at = text[last..]
                .find(marker)
                .map(|i| i + last)
                .unwrap_or_else(|| unreachable!("missing or out of order: {marker}"));
            last = at;
        }
    }

    #[test]
    fn test_caps_tips_and_insights() {
        let text = compose(&full_bundle(), &predictions());
        assert!(text.contains("   • tip three"));
        assert!(!text.contains("tip four"));
        assert!(text.contains("   • insight two"));
        assert!(!text.contains("insight three"));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let text = compose(&RecommendationBundle::default(), &predictions());
        assert!(!text.contains("Medication Options"));
        assert!(!text.contains("Hygiene Products"));
        assert!(!text.contains("Lifestyle Tips"));
        assert!(!text.contains("Phase Insights"));
        assert!(!text.contains("Symptoms Addressed"));
        assert!(text.contains("Next period in approximately 8 days"));
        assert!(text.contains("Likely entering luteal phase soon"));
        assert!(text.contains("Track your cycle to understand patterns"));
    }

    #[test]
    fn test_deterministic() {
        let a = compose(&full_bundle(), &predictions());
        let b = compose(&full_bundle(), &predictions());
        assert_eq!(a, b);
    }
}
