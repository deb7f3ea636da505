// src/pipeline/builder.rs
use super::config::{ConverterConfig, DEFAULT_ASSETS_ROOT};
use super::converter::Converter;
use crate::error::PipelineError;
use flatskin_core::{AssetSink, ExportConfig, FontStore, InfoConfig, RasterEncoder};
use flatskin_resource::{FilesystemAssetSink, FilesystemFontStore, PngRasterEncoder};
use std::path::{Path, PathBuf};

/// A builder for creating a `Converter`.
///
/// Without further configuration assets go to `./skins/<document>/` through
/// the filesystem, rasters are encoded by `PngRasterEncoder`, and no font
/// store is attached.
#[derive(Default)]
pub struct ConverterBuilder {
    export: ExportConfig,
    assets_root: Option<PathBuf>,
    asset_sink: Option<Box<dyn AssetSink>>,
    encoder: Option<Box<dyn RasterEncoder>>,
    font_store: Option<Box<dyn FontStore>>,
}

impl ConverterBuilder {
    /// Creates a new `ConverterBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies a file-level configuration. Later `with_*` calls still win.
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.export = config.export;
        if let Some(root) = config.assets_root {
            self.assets_root = Some(root);
        }
        if let Some(dir) = config.font_dir {
            self.font_store = Some(Box::new(FilesystemFontStore::new(dir)));
        }
        self
    }

    /// Loads and applies a JSON configuration file.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let config = ConverterConfig::from_json_file(path)?;
        Ok(self.with_config(config))
    }

    /// Prefix of the `src` paths written into the scene.
    pub fn with_src_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export.src_prefix = prefix.into();
        self
    }

    pub fn with_info(mut self, info: InfoConfig) -> Self {
        self.export.info = info;
        self
    }

    /// Writes assets to `<root>/<document>/` on the local filesystem.
    pub fn with_assets_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.assets_root = Some(root.as_ref().to_path_buf());
        self.asset_sink = None;
        self
    }

    /// Uses a custom asset sink instead of the filesystem.
    pub fn with_asset_sink(mut self, sink: Box<dyn AssetSink>) -> Self {
        self.asset_sink = Some(sink);
        self
    }

    pub fn with_encoder(mut self, encoder: Box<dyn RasterEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Reads fonts for retrieval from `dir`.
    pub fn with_font_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.font_store = Some(Box::new(FilesystemFontStore::new(dir)));
        self
    }

    pub fn with_font_store(mut self, store: Box<dyn FontStore>) -> Self {
        self.font_store = Some(store);
        self
    }

    /// Consumes the builder and creates the `Converter`.
    pub fn build(self) -> Result<Converter, PipelineError> {
        if self.export.src_prefix.contains('\\') {
            return Err(PipelineError::Config(format!(
                "src prefix '{}' must use forward slashes",
                self.export.src_prefix
            )));
        }

        let sink: Box<dyn AssetSink> = match (self.asset_sink, self.assets_root) {
            (Some(sink), _) => sink,
            (None, Some(root)) => Box::new(FilesystemAssetSink::new(root)),
            (None, None) => Box::new(FilesystemAssetSink::new(DEFAULT_ASSETS_ROOT)),
        };
        let encoder = self
            .encoder
            .unwrap_or_else(|| Box::new(PngRasterEncoder::new()));

        log::debug!("Building converter with asset sink {}", sink.name());
        Ok(Converter::new(self.export, encoder, sink, self.font_store))
    }
}
