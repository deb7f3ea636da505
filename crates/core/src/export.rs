//! Raster asset export: name, encode, write, describe.

use crate::error::{AssetError, ConvertError};
use crate::scene::ExportedAsset;
use flatskin_traits::{AssetSink, RasterEncoder};
use flatskin_types::{AssetFileName, DocumentName, LayerNode, RasterData};

/// The result of exporting one raster layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Exported {
    pub asset: ExportedAsset,
    pub src: String,
}

/// Exports raster layers of one document into an `AssetSink`.
///
/// File names are not disambiguated: two layers sanitizing to the same name
/// write the same file, and the sink keeps the later bytes.
#[derive(Debug, Clone, Copy)]
pub struct AssetExporter<'a> {
    document: &'a DocumentName,
    src_prefix: &'a str,
    encoder: &'a dyn RasterEncoder,
    sink: &'a dyn AssetSink,
}

impl<'a> AssetExporter<'a> {
    pub fn new(
        document: &'a DocumentName,
        src_prefix: &'a str,
        encoder: &'a dyn RasterEncoder,
        sink: &'a dyn AssetSink,
    ) -> Self {
        Self {
            document,
            src_prefix,
            encoder,
            sink,
        }
    }

    /// File name for a raster node: its sanitized name, or `image_<exported>`.
    pub fn file_name(node: &LayerNode, exported: usize) -> AssetFileName {
        match node.display_name() {
            Some(name) => AssetFileName::new(Some(name), "png"),
            None => AssetFileName::new(Some(format!("image_{}", exported).as_str()), "png"),
        }
    }

    /// `<prefix>/<document>/<file>`, without doubling a trailing slash.
    pub fn src_path(&self, file: &AssetFileName) -> String {
        let prefix = self.src_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", self.document, file)
        } else {
            format!("{}/{}/{}", prefix, self.document, file)
        }
    }

    pub fn export(
        &self,
        node: &LayerNode,
        raster: &RasterData,
        exported: usize,
    ) -> Result<Exported, ConvertError> {
        let file = Self::file_name(node, exported);
        let failed = |source: AssetError| ConvertError::Asset {
            name: file.to_string(),
            source,
        };

        let data = self
            .encoder
            .encode_png(raster)
            .map_err(|e| failed(e.into()))?;
        self.sink
            .write(self.document, &file, &data)
            .map_err(|e| failed(e.into()))?;
        log::debug!(
            "Exported '{}' ({} bytes) via {}",
            file,
            data.len(),
            self.sink.name()
        );

        let src = self.src_path(&file);
        Ok(Exported {
            asset: ExportedAsset { name: file, data },
            src,
        })
    }
}
