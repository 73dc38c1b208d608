//! Error types for label fitting

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Measurement failed: {0}")]
    MeasurementFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FitError>;
