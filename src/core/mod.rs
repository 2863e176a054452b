pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};

/// One transformer's operational snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformerReading {
    pub transformer_id: String,
    pub load_percent: f64,
    pub oil_temp_c: f64,
    pub rainfall_mm: f64,
    pub age_years: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,    // score < 40
    Medium, // 40 <= score < 70
    High,   // score >= 70
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary label produced by the trained classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AiLabel {
    Low,
    High,
}

impl AiLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiLabel::Low => "LOW",
            AiLabel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for AiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived risk fields for one reading. Recomputed on every scoring pass,
/// never persisted independently of the reading it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub rule_score: u32,
    pub rule_label: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_label: Option<AiLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
    pub explanation: String,
}

/// A reading augmented with its assessment -- one output row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredReading {
    #[serde(flatten)]
    pub reading: TransformerReading,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub total_transformers: usize,
}

impl RiskDistribution {
    pub fn from_rows(rows: &[ScoredReading]) -> Self {
        let mut dist = Self {
            total_transformers: rows.len(),
            ..Self::default()
        };
        for row in rows {
            match row.assessment.rule_label {
                RiskLevel::High => dist.high_count += 1,
                RiskLevel::Medium => dist.medium_count += 1,
                RiskLevel::Low => dist.low_count += 1,
            }
        }
        dist
    }
}

/// A row excluded from scoring, with the reason it was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub transformer_id: String,
    pub field: String,
    pub message: String,
}

/// A row the classifier could not score. Rule-based fields for the row
/// remain valid; only the AI fields are absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionFailure {
    pub transformer_id: String,
    pub message: String,
}

/// Full output of one scoring pass over a fleet table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FleetReport {
    pub timestamp: DateTime<Utc>,
    pub rows: Vec<ScoredReading>,
    pub distribution: RiskDistribution,
    pub rejected: Vec<RejectedRow>,
    /// Rows whose classifier call failed; distinguishes "model skipped
    /// this row" from "no model ran".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prediction_failures: Vec<PredictionFailure>,
    /// Set when the classifier artifact could not be used for this pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_status: Option<String>,
}
