//! # flatskin
//!
//! Turns a parsed layered image document into a flat JSON scene, a set of
//! exported PNG assets and a font manifest.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Converter, ConverterBuilder, ConverterConfig};

pub use flatskin_core::{
    Conversion, ConvertError, ExportConfig, ExportedAsset, ExportedLayer, FontFile, InfoConfig,
    LayerType, Scene, SceneInfo,
};
pub use flatskin_resource::{
    FilesystemAssetSink, FilesystemFontStore, InMemoryAssetSink, InMemoryFontStore,
    PngRasterEncoder,
};
pub use flatskin_source::{DocumentSource, InMemoryDocumentSource, JsonDocumentSource};
pub use flatskin_types::{
    Bounds, Document, FontSpec, LayerKind, LayerNode, RasterData, TextContent,
};
