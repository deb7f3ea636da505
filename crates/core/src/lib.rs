//! # flatskin-core
//!
//! Platform-agnostic flattening of layered documents into scene descriptions.
//!
//! This crate provides:
//! - **walker**: preorder traversal that flattens the layer tree
//! - **extract**: per-node geometry and text attributes
//! - **export**: raster asset export through an `AssetSink`
//! - **fonts**: font manifest collection and font file retrieval
//! - **assemble** / **convert**: the output envelope and the entry point
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**: no filesystem access and no
//! image codec. Encoding, asset storage and font storage come in through the
//! traits in `flatskin-traits`.

// Re-export foundation crates
pub use flatskin_traits as traits;
pub use flatskin_types as types;

pub mod assemble;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod extract;
pub mod fonts;
pub mod scene;
pub mod walker;

pub use config::{ExportConfig, InfoConfig};
pub use convert::{ExportContext, convert_document, validate_document};
pub use error::{AssetError, ConvertError};
pub use export::AssetExporter;
pub use fonts::{collect_fonts, retrieve_fonts};
pub use scene::{Conversion, ExportedAsset, ExportedLayer, FontFile, LayerType, Scene, SceneInfo};
pub use walker::{LayerWalker, WalkState};

// Re-export platform abstraction traits
pub use traits::{
    AssetSink, EncodeError, FontStore, InMemoryAssetSink, InMemoryFontStore, RasterEncoder,
    ResourceError, SharedResourceData,
};
