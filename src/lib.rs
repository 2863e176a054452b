// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod model;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    AiLabel, Error, FleetReport, PredictionFailure, RejectedRow, Result, RiskAssessment,
    RiskDistribution, RiskLevel, ScoredReading, TransformerReading,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::readings::{load_readings, LoadOutcome};

pub use crate::model::{Classifier, ClassifierAdapter, LogisticArtifact, Prediction};

pub use crate::risk::{assess, classify, explain, score};
