//! Serialized logistic-regression backend.
//!
//! The artifact is a small JSON file produced by the offline training
//! pipeline: fitted coefficients, intercept, and the feature order the
//! model was trained against. Loading verifies the order matches
//! [`FEATURE_ORDER`](super::FEATURE_ORDER) so a stale or foreign artifact
//! cannot silently misscore.

use super::{Classifier, FEATURE_ORDER};
use crate::core::errors::{Error, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Decision threshold on the positive-class probability.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::ModelUnavailable(format!("cannot open artifact {}: {}", path.display(), e))
        })?;
        let artifact: LogisticArtifact =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                Error::ModelUnavailable(format!("cannot parse artifact {}: {}", path.display(), e))
            })?;
        artifact.validate()?;
        log::debug!("Loaded classifier artifact from {}", path.display());
        Ok(artifact)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names != FEATURE_ORDER {
            return Err(Error::ModelUnavailable(format!(
                "artifact feature order {:?} does not match expected {:?}",
                self.feature_names, FEATURE_ORDER
            )));
        }
        if self.coefficients.len() != FEATURE_ORDER.len() {
            return Err(Error::ModelUnavailable(format!(
                "artifact has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_ORDER.len()
            )));
        }
        if !self.coefficients.iter().all(|c| c.is_finite()) || !self.intercept.is_finite() {
            return Err(Error::ModelUnavailable(
                "artifact contains non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }

    fn positive_probability(&self, features: &Array1<f64>) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(Error::ModelUnavailable(format!(
                "feature vector length {} does not match model arity {}",
                features.len(),
                self.coefficients.len()
            )));
        }
        let weights = Array1::from(self.coefficients.clone());
        let z = features.dot(&weights) + self.intercept;
        Ok(sigmoid(z))
    }
}

// Numerically stable on both tails.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

impl Classifier for LogisticArtifact {
    fn predict(&self, features: &Array1<f64>) -> Result<u8> {
        let p_high = self.positive_probability(features)?;
        Ok(if p_high >= self.threshold { 1 } else { 0 })
    }

    fn predict_probability(&self, features: &Array1<f64>) -> Result<[f64; 2]> {
        let p_high = self.positive_probability(features)?;
        Ok([1.0 - p_high, p_high])
    }
}
