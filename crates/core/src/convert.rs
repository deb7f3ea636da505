//! The conversion entry point: validate, walk, collect, assemble.

use crate::assemble::{assemble, scene_info};
use crate::config::ExportConfig;
use crate::error::ConvertError;
use crate::export::AssetExporter;
use crate::fonts::collect_fonts;
use crate::scene::Conversion;
use crate::walker::{LayerWalker, WalkState};
use flatskin_traits::{AssetSink, RasterEncoder};
use flatskin_types::{Document, DocumentName};

/// Everything a conversion needs besides the document itself.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    pub config: &'a ExportConfig,
    pub encoder: &'a dyn RasterEncoder,
    pub sink: &'a dyn AssetSink,
}

/// Rejects a root that has no usable dimensions.
pub fn validate_document(document: &Document) -> Result<(), ConvertError> {
    if !document.has_valid_dimensions() {
        return Err(ConvertError::InvalidInput(format!(
            "document has no usable dimensions ({}x{})",
            document.width, document.height
        )));
    }
    Ok(())
}

/// Converts one document.
///
/// The root is validated before anything is written. Per-layer export
/// failures are logged and skipped; the returned error is always fatal.
/// `file_name` is the original file name, used for `info.file`.
pub fn convert_document(
    document: &Document,
    name: &DocumentName,
    file_name: Option<&str>,
    ctx: ExportContext<'_>,
) -> Result<Conversion, ConvertError> {
    validate_document(document)?;

    let exporter = AssetExporter::new(name, &ctx.config.src_prefix, ctx.encoder, ctx.sink);
    let mut state = WalkState::default();
    let layers = LayerWalker::new(exporter).walk(&document.children, &mut state);
    let fonts = collect_fonts(&document.children);

    log::info!(
        "Converted '{}': {} layers, {} assets, {} fonts",
        name,
        layers.len(),
        state.assets.len(),
        fonts.len()
    );

    let info = scene_info(&ctx.config.info, file_name.unwrap_or(name.as_str()));
    Ok(assemble(name, info, layers, state.assets, fonts))
}
