//! RasterEncoder trait: turns a layer's pixel data into PNG bytes.

use flatskin_types::RasterData;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Raster buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("Raster has zero area ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("Raster is not PNG data")]
    NotPng,

    #[error("PNG encoding failed: {0}")]
    Encoder(String),
}

/// Produces PNG-encoded bytes for a raster layer.
pub trait RasterEncoder: Send + Sync + Debug {
    fn encode_png(&self, raster: &RasterData) -> Result<Vec<u8>, EncodeError>;
}
