pub mod fixtures;

use flatskin::{Conversion, Converter, ConverterBuilder, JsonDocumentSource, PipelineError};
use serde_json::Value;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Build a converter writing assets under `assets_root` with default settings.
pub fn converter_in(assets_root: &Path) -> Result<Converter, PipelineError> {
    ConverterBuilder::new().with_assets_root(assets_root).build()
}

/// Convert a JSON document tree as document `name`, going through the JSON source.
pub fn convert_json(
    converter: &Converter,
    document: &Value,
    name: &str,
) -> Result<Conversion, PipelineError> {
    let mut source = JsonDocumentSource::from_json_str(document.to_string());
    converter.convert_source(&mut source, name)
}

/// Serialized `layers` array of a conversion.
pub fn layers_json(conversion: &Conversion) -> Value {
    serde_json::to_value(&conversion.document.layers).expect("layers serialize")
}
