//! Converter construction and orchestration.
//!
//! - [`ConverterBuilder`]: Fluent builder wiring encoder, asset sink and font store
//! - [`Converter`]: Runs conversions and font retrieval
//! - [`ConverterConfig`]: File-level configuration
//!
//! # Example
//!
//! ```ignore
//! use flatskin::{ConverterBuilder, JsonDocumentSource};
//!
//! let converter = ConverterBuilder::new()
//!     .with_assets_root("public/skins")
//!     .with_font_dir("fonts")
//!     .build()?;
//!
//! let mut source = JsonDocumentSource::from_path("menu.json");
//! let conversion = converter.convert_source(&mut source, "menu")?;
//! let fonts = converter.fetch_fonts(&conversion.fonts);
//! ```

mod builder;
pub mod config;
mod converter;

pub use builder::ConverterBuilder;
pub use config::ConverterConfig;
pub use converter::Converter;
