use crate::error::PipelineError;
use flatskin_core::ExportConfig;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default directory assets are written under when nothing else is configured.
pub const DEFAULT_ASSETS_ROOT: &str = "skins";

/// File-level converter configuration.
///
/// ```json
/// {
///   "assetsRoot": "public/skins",
///   "fontDir": "fonts",
///   "srcPrefix": "../skins",
///   "info": { "author": "UI team", "generator": "flatskin" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Root of the per-document asset directories.
    pub assets_root: Option<PathBuf>,
    /// Directory holding `.ttf` files for font retrieval.
    pub font_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub export: ExportConfig,
}

impl ConverterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }
}
