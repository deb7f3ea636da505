//! Font manifest collection and font file retrieval.

use crate::error::ConvertError;
use crate::scene::FontFile;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use flatskin_traits::FontStore;
use flatskin_types::{AssetFileName, LayerNode};
use std::collections::HashSet;

/// Collects the distinct font names used anywhere in the tree.
///
/// Runs independently of the walker. Children are visited whatever the
/// node's classification; names keep their first-seen preorder position.
pub fn collect_fonts(nodes: &[LayerNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut fonts = Vec::new();
    collect_into(nodes, &mut seen, &mut fonts);
    fonts
}

fn collect_into<'a>(nodes: &'a [LayerNode], seen: &mut HashSet<&'a str>, fonts: &mut Vec<String>) {
    for node in nodes {
        if let Some(name) = node.font_name()
            && seen.insert(name)
        {
            fonts.push(name.to_string());
        }
        collect_into(&node.children, seen, fonts);
    }
}

/// The store file name for a font: sanitized name plus `.ttf`.
pub fn font_file_name(font: &str) -> AssetFileName {
    AssetFileName::new(Some(font), "ttf")
}

/// Fetches font files for `names` from `store`.
///
/// Names without a matching file are skipped. Any store failure degrades to
/// an empty list; it is logged, never returned.
pub fn retrieve_fonts<S: AsRef<str>>(names: &[S], store: &dyn FontStore) -> Vec<FontFile> {
    match try_retrieve_fonts(names, store) {
        Ok(fonts) => fonts,
        Err(e) => {
            log::warn!("Font store {} unavailable: {}", store.name(), e);
            Vec::new()
        }
    }
}

fn try_retrieve_fonts<S: AsRef<str>>(
    names: &[S],
    store: &dyn FontStore,
) -> Result<Vec<FontFile>, ConvertError> {
    let available: HashSet<String> = store.list()?.into_iter().collect();
    let mut fetched = HashSet::new();
    let mut fonts = Vec::new();

    for name in names {
        let file = font_file_name(name.as_ref());
        if !available.contains(file.as_str()) {
            log::debug!("No font file {} for '{}'", file, name.as_ref());
            continue;
        }
        if !fetched.insert(file.clone()) {
            continue;
        }
        let data = store.load(file.as_str())?;
        fonts.push(FontFile {
            name: file.to_string(),
            data: BASE64_STANDARD.encode(&*data),
        });
    }
    Ok(fonts)
}
