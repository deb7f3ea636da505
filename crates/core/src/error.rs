//! Error types for conversion and font retrieval.

use flatskin_traits::{EncodeError, ResourceError};
use flatskin_types::DocumentNameError;
use thiserror::Error;

/// Why a single raster layer could not be exported.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("write failed: {0}")]
    Write(#[from] ResourceError),
}

/// The main error enum for conversion operations.
///
/// Only `InvalidInput` ever leaves a conversion. `Asset` is recovered per
/// layer by the walker and `Store` is recovered by font retrieval, both by
/// skipping the affected item.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Layer '{name}' could not be exported: {source}")]
    Asset {
        name: String,
        #[source]
        source: AssetError,
    },
    #[error("Font store error: {0}")]
    Store(#[from] ResourceError),
}

impl ConvertError {
    /// Whether the error aborts the whole operation rather than one item.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConvertError::Asset { .. } | ConvertError::Store(_))
    }
}

impl From<DocumentNameError> for ConvertError {
    fn from(e: DocumentNameError) -> Self {
        ConvertError::InvalidInput(e.to_string())
    }
}
