//! Backends for the flatskin export pipeline.
//!
//! This crate provides the platform-specific implementations of the traits
//! from flatskin-traits.
//!
//! ## Available Backends
//!
//! - [`FilesystemAssetSink`]: Writes assets under `<root>/<document>/`
//! - [`FilesystemFontStore`]: Reads font files from one directory
//! - [`PngRasterEncoder`]: Encodes raster layers with the `image` crate
//!
//! ## Re-exports
//!
//! For convenience, the in-memory variants from flatskin-traits are
//! re-exported as well.

mod filesystem;
mod png;

pub use filesystem::{FilesystemAssetSink, FilesystemFontStore};
pub use png::PngRasterEncoder;

pub use flatskin_traits::{InMemoryAssetSink, InMemoryFontStore};
