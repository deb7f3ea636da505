pub mod color;
pub mod document;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use document::{Document, FontSpec, LayerKind, LayerNode, RasterData, TextContent};
pub use geometry::{Bounds, Frame};
pub use ids::{AssetFileName, DocumentName, DocumentNameError, sanitize_stem};
