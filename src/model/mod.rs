//! Trained-classifier integration.
//!
//! The classifier itself is an opaque, offline-trained collaborator. This
//! module only defines the seam: a fixed-order feature vector in, a binary
//! label and a class-probability pair out. The concrete backend
//! ([`logistic::LogisticArtifact`]) is swappable without touching the rule
//! scorer or any caller.

pub mod adapter;
pub mod logistic;

use crate::core::errors::Result;
use crate::core::TransformerReading;
use ndarray::Array1;

pub use adapter::{ClassifierAdapter, Prediction};
pub use logistic::LogisticArtifact;

/// Feature order consumed by every classifier backend. The trained
/// artifact records the order it was fitted with; a mismatch makes the
/// model unusable.
pub const FEATURE_ORDER: [&str; 4] = ["load_percent", "oil_temp_c", "rainfall_mm", "age_years"];

/// Opaque binary classifier over a fixed-order numeric feature vector.
pub trait Classifier {
    /// Predict the class label (0 or 1) for one feature vector.
    fn predict(&self, features: &Array1<f64>) -> Result<u8>;

    /// Class probabilities as `[p_low, p_high]`, each in [0, 1].
    fn predict_probability(&self, features: &Array1<f64>) -> Result<[f64; 2]>;
}

/// Build the ordered feature vector for one reading.
pub fn feature_vector(reading: &TransformerReading) -> Array1<f64> {
    Array1::from(vec![
        reading.load_percent,
        reading.oil_temp_c,
        reading.rainfall_mm,
        reading.age_years,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_order() {
        let reading = TransformerReading {
            transformer_id: "T-001".to_string(),
            load_percent: 90.0,
            oil_temp_c: 75.0,
            rainfall_mm: 150.0,
            age_years: 20.0,
        };
        let v = feature_vector(&reading);
        assert_eq!(v.to_vec(), vec![90.0, 75.0, 150.0, 20.0]);
    }
}
