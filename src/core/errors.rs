//! Shared error types for the application

use thiserror::Error;

/// Main error type for gridmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A reading field is missing or non-numeric; the row is excluded
    /// from scoring and reported, never zero-filled.
    #[error("Validation error for transformer {transformer_id}: field `{field}` {message}")]
    Validation {
        transformer_id: String,
        field: String,
        message: String,
    },

    /// The trained classifier artifact could not be loaded or is unusable.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The classifier failed on a single reading. Scoped to that row;
    /// other rows keep scoring.
    #[error("Prediction failed for transformer {transformer_id}: {message}")]
    Prediction {
        transformer_id: String,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error naming the offending field
    pub fn validation(
        transformer_id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            transformer_id: transformer_id.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a per-row prediction error
    pub fn prediction(transformer_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Prediction {
            transformer_id: transformer_id.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
