// src/pipeline/converter.rs
use crate::error::PipelineError;
use flatskin_core::{
    AssetSink, ConvertError, Conversion, ExportConfig, ExportContext, FontFile, FontStore,
    RasterEncoder, convert_document, retrieve_fonts,
};
use flatskin_source::DocumentSource;
use flatskin_types::{Document, DocumentName};

/// A configured converter. Build one with `ConverterBuilder`.
///
/// Holds no per-document state, so one converter can serve many documents.
pub struct Converter {
    config: ExportConfig,
    encoder: Box<dyn RasterEncoder>,
    sink: Box<dyn AssetSink>,
    font_store: Option<Box<dyn FontStore>>,
}

impl Converter {
    pub(crate) fn new(
        config: ExportConfig,
        encoder: Box<dyn RasterEncoder>,
        sink: Box<dyn AssetSink>,
        font_store: Option<Box<dyn FontStore>>,
    ) -> Self {
        Self {
            config,
            encoder,
            sink,
            font_store,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn asset_sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn has_font_store(&self) -> bool {
        self.font_store.is_some()
    }

    fn context(&self) -> ExportContext<'_> {
        ExportContext {
            config: &self.config,
            encoder: self.encoder.as_ref(),
            sink: self.sink.as_ref(),
        }
    }

    /// Converts `document`, exporting its assets under `name`.
    pub fn convert(&self, document: &Document, name: &str) -> Result<Conversion, PipelineError> {
        self.convert_file(document, name, None)
    }

    /// Like `convert`, recording `file_name` as the document's original file.
    pub fn convert_file(
        &self,
        document: &Document,
        name: &str,
        file_name: Option<&str>,
    ) -> Result<Conversion, PipelineError> {
        let name = DocumentName::new(name).map_err(ConvertError::from)?;
        Ok(convert_document(document, &name, file_name, self.context())?)
    }

    /// Loads the document from `source` first; a failing source is invalid input.
    pub fn convert_source(
        &self,
        source: &mut dyn DocumentSource,
        name: &str,
    ) -> Result<Conversion, PipelineError> {
        let document = source
            .load()
            .map_err(|e| ConvertError::InvalidInput(e.to_string()))?;
        let file_name = source.file_name();
        self.convert_file(&document, name, file_name.as_deref())
    }

    /// Fetches the font files for `names`. Without a font store, or when the
    /// store fails, the result is empty.
    pub fn fetch_fonts<S: AsRef<str>>(&self, names: &[S]) -> Vec<FontFile> {
        match &self.font_store {
            Some(store) => retrieve_fonts(names, store.as_ref()),
            None => {
                log::warn!("No font store configured; returning no fonts");
                Vec::new()
            }
        }
    }
}
