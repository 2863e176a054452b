pub mod explanation;

use crate::core::{RiskAssessment, RiskLevel, ScoredReading, TransformerReading};

pub use explanation::explain;

/// Point contribution from electrical load.
///
/// Band entry is strict `>`: a reading of exactly 80 falls in the +15
/// band, not +30. The same holds for every band below. This asymmetry is
/// part of the observed contract and must not be "fixed".
pub fn load_contribution(load_percent: f64) -> u32 {
    if load_percent > 80.0 {
        30
    } else if load_percent > 60.0 {
        15
    } else {
        0
    }
}

/// Point contribution from oil temperature.
pub fn oil_temp_contribution(oil_temp_c: f64) -> u32 {
    if oil_temp_c > 70.0 {
        30
    } else if oil_temp_c > 55.0 {
        15
    } else {
        0
    }
}

/// Point contribution from rainfall exposure.
pub fn rainfall_contribution(rainfall_mm: f64) -> u32 {
    if rainfall_mm > 20.0 {
        20
    } else if rainfall_mm > 5.0 {
        10
    } else {
        0
    }
}

/// Point contribution from transformer age.
pub fn age_contribution(age_years: f64) -> u32 {
    if age_years > 15.0 {
        20
    } else if age_years > 8.0 {
        10
    } else {
        0
    }
}

/// Rule-based risk score: the sum of the four independent band
/// contributions. Always in [0, 100]; no clamping, no interaction
/// between bands.
pub fn score(reading: &TransformerReading) -> u32 {
    load_contribution(reading.load_percent)
        + oil_temp_contribution(reading.oil_temp_c)
        + rainfall_contribution(reading.rainfall_mm)
        + age_contribution(reading.age_years)
}

/// Bucket a rule score into a risk level. Inclusive lower bounds:
/// 70 is HIGH, 40 is MEDIUM.
pub fn classify(rule_score: u32) -> RiskLevel {
    match rule_score {
        s if s >= 70 => RiskLevel::High,
        s if s >= 40 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// Score one reading and attach the derived fields. AI fields start
/// absent; the classifier adapter fills them in separately when a model
/// is available.
pub fn assess(reading: &TransformerReading) -> ScoredReading {
    let rule_score = score(reading);
    ScoredReading {
        reading: reading.clone(),
        assessment: RiskAssessment {
            rule_score,
            rule_label: classify(rule_score),
            ai_label: None,
            ai_confidence: None,
            explanation: explain(reading),
        },
    }
}
