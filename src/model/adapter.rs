use super::{feature_vector, Classifier, LogisticArtifact};
use crate::core::errors::{Error, Result};
use crate::core::{AiLabel, TransformerReading};
use std::path::Path;

/// One classifier verdict for one reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub label: AiLabel,
    /// Probability of the HIGH class, rounded to 2 decimal places.
    pub confidence: f64,
}

/// Wraps the opaque classifier behind the reading-level contract: build
/// the ordered feature vector, invoke predict and predict-probability,
/// round the positive-class probability, map 1 to HIGH and 0 to LOW.
///
/// The artifact is loaded once at construction and treated as read-only
/// for the process lifetime. Construction failure means the model is
/// unavailable for the whole pass; rule-based scoring stays usable.
pub struct ClassifierAdapter {
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter").finish_non_exhaustive()
    }
}

impl ClassifierAdapter {
    /// Load the logistic artifact at `path`. Fails with
    /// [`Error::ModelUnavailable`] if it cannot be loaded or validated.
    pub fn from_artifact(path: &Path) -> Result<Self> {
        let artifact = LogisticArtifact::load(path)?;
        Ok(Self::new(Box::new(artifact)))
    }

    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Predict the AI label and confidence for one reading. Failures are
    /// scoped to this reading; callers keep scoring other rows.
    pub fn predict(&self, reading: &TransformerReading) -> Result<Prediction> {
        let features = feature_vector(reading);
        let label = self
            .classifier
            .predict(&features)
            .map_err(|e| Error::prediction(reading.transformer_id.as_str(), e.to_string()))?;
        let [_, p_high] = self
            .classifier
            .predict_probability(&features)
            .map_err(|e| Error::prediction(reading.transformer_id.as_str(), e.to_string()))?;

        let label = match label {
            1 => AiLabel::High,
            _ => AiLabel::Low,
        };
        Ok(Prediction {
            label,
            confidence: round_2dp(p_high),
        })
    }
}

fn round_2dp(p: f64) -> f64 {
    (p * 100.0).round() / 100.0
}
