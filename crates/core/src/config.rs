use serde::Deserialize;

/// Default prefix of every asset `src` path, relative to the scene file.
pub const DEFAULT_SRC_PREFIX: &str = "../skins";

/// Static metadata copied into the envelope's `info` block.
///
/// `file` falls back to the document's file name when unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoConfig {
    pub description: String,
    pub file: Option<String>,
    pub date: String,
    pub title: String,
    pub author: String,
    pub keywords: String,
    pub generator: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            description: "Flattened layer scene".to_string(),
            file: None,
            date: String::new(),
            title: String::new(),
            author: String::new(),
            keywords: String::new(),
            generator: concat!("flatskin ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Options that shape the exported scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// Prefix of asset paths; `src` becomes `<prefix>/<document>/<file>`.
    pub src_prefix: String,
    pub info: InfoConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            src_prefix: DEFAULT_SRC_PREFIX.to_string(),
            info: InfoConfig::default(),
        }
    }
}
