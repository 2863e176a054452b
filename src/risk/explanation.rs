//! Human-readable reasons for a reading's risk.
//!
//! The trigger thresholds here are deliberately looser than the scoring
//! bands in the parent module and are a separate contract. The text is
//! illustrative, not derived from the score; do not unify the two
//! threshold sets.

use crate::core::TransformerReading;

const SAFE_MESSAGE: &str = "operating within safe limits";

/// Concatenate the triggered reasons for a reading, or the fixed safe
/// message when nothing triggers.
pub fn explain(reading: &TransformerReading) -> String {
    let reasons = trigger_reasons(reading);
    if reasons.is_empty() {
        SAFE_MESSAGE.to_string()
    } else {
        reasons.join(", ")
    }
}

fn trigger_reasons(reading: &TransformerReading) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if reading.load_percent > 70.0 {
        reasons.push("High electrical load");
    }
    if reading.oil_temp_c > 60.0 {
        reasons.push("Elevated oil temperature");
    }
    if reading.rainfall_mm > 15.0 {
        reasons.push("Heavy rainfall / moisture risk");
    }
    if reading.age_years > 10.0 {
        reasons.push("Aging transformer");
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reading(load: f64, oil: f64, rain: f64, age: f64) -> TransformerReading {
        TransformerReading {
            transformer_id: "T-001".to_string(),
            load_percent: load,
            oil_temp_c: oil,
            rainfall_mm: rain,
            age_years: age,
        }
    }

    #[test]
    fn test_all_reasons_in_fixed_order() {
        assert_eq!(
            explain(&reading(90.0, 75.0, 150.0, 20.0)),
            "High electrical load, Elevated oil temperature, \
             Heavy rainfall / moisture risk, Aging transformer"
        );
    }

    #[test]
    fn test_safe_message_when_nothing_triggers() {
        assert_eq!(explain(&reading(50.0, 50.0, 2.0, 5.0)), SAFE_MESSAGE);
    }

    #[test]
    fn test_single_reason() {
        assert_eq!(explain(&reading(75.0, 50.0, 2.0, 5.0)), "High electrical load");
    }

    #[test]
    fn test_explanation_thresholds_are_looser_than_scoring_bands() {
        // 75% load scores +15 in the band table but already reads as
        // "High electrical load" here. The sets are independent.
        let r = reading(75.0, 58.0, 12.0, 9.0);
        assert_eq!(crate::risk::score(&r), 15 + 15 + 10 + 10);
        assert_eq!(explain(&r), "High electrical load");
    }

    #[test]
    fn test_trigger_boundaries_are_strict() {
        assert_eq!(explain(&reading(70.0, 60.0, 15.0, 10.0)), SAFE_MESSAGE);
    }
}
