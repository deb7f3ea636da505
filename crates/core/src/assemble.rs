use crate::config::InfoConfig;
use crate::scene::{Conversion, ExportedAsset, ExportedLayer, Scene, SceneInfo};
use flatskin_types::DocumentName;

/// Builds the `info` block. Only `file` has a fallback, `default_file`.
pub fn scene_info(info: &InfoConfig, default_file: &str) -> SceneInfo {
    SceneInfo {
        description: info.description.clone(),
        file: info
            .file
            .clone()
            .unwrap_or_else(|| default_file.to_string()),
        date: info.date.clone(),
        title: info.title.clone(),
        author: info.author.clone(),
        keywords: info.keywords.clone(),
        generator: info.generator.clone(),
    }
}

/// Wraps the computed outputs in the envelope.
pub fn assemble(
    name: &DocumentName,
    info: SceneInfo,
    layers: Vec<ExportedLayer>,
    images: Vec<ExportedAsset>,
    fonts: Vec<String>,
) -> Conversion {
    Conversion {
        document: Scene {
            name: name.to_string(),
            path: format!("{}/", name),
            info,
            layers,
        },
        images,
        fonts,
    }
}
