// src/error.rs
use flatskin_core::ConvertError;
use thiserror::Error;

/// Top-level error for building and running a converter.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Whether the caller handed over something unusable (as opposed to an
    /// environment or configuration problem).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::Convert(ConvertError::InvalidInput(_)))
    }
}
