//! Filesystem-backed asset sink and font store for native platforms.
//!
//! # Security
//!
//! Both backends refuse names that would resolve outside their root
//! directory (absolute paths, `..` components, embedded separators).

use flatskin_traits::{AssetSink, FontStore, ResourceError, SharedResourceData};
use flatskin_types::{AssetFileName, DocumentName};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Returns `true` when `name` is exactly one normal path component.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Writes assets to `<root>/<document>/<file>`.
///
/// The per-document directory is created on first write. Writing the same
/// file twice silently replaces the earlier bytes.
#[derive(Debug)]
pub struct FilesystemAssetSink {
    root: PathBuf,
}

impl FilesystemAssetSink {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that holds the assets of `document`.
    pub fn document_dir(&self, document: &DocumentName) -> PathBuf {
        self.root.join(document.as_str())
    }
}

impl AssetSink for FilesystemAssetSink {
    fn write(
        &self,
        document: &DocumentName,
        file: &AssetFileName,
        data: &[u8],
    ) -> Result<(), ResourceError> {
        let display = format!("{}/{}", document, file);
        if !is_single_component(document.as_str()) || !is_single_component(file.as_str()) {
            return Err(ResourceError::WriteFailed {
                path: display,
                message: "path escapes the asset root".to_string(),
            });
        }

        let dir = self.document_dir(document);
        let write_failed = |e: std::io::Error| ResourceError::WriteFailed {
            path: display.clone(),
            message: e.to_string(),
        };
        fs::create_dir_all(&dir).map_err(write_failed)?;
        fs::write(dir.join(file.as_str()), data).map_err(write_failed)?;
        log::debug!("Wrote {} bytes to {}", data.len(), display);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetSink"
    }
}

/// Reads font files from a single directory (no recursion).
#[derive(Debug)]
pub struct FilesystemFontStore {
    dir: PathBuf,
}

impl FilesystemFontStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FontStore for FilesystemFontStore {
    fn list(&self) -> Result<Vec<String>, ResourceError> {
        let load_failed = |e: std::io::Error| ResourceError::LoadFailed {
            path: self.dir.display().to_string(),
            message: e.to_string(),
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(load_failed)? {
            let entry = entry.map_err(load_failed)?;
            if !entry.file_type().map_err(load_failed)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn load(&self, file_name: &str) -> Result<SharedResourceData, ResourceError> {
        if !is_single_component(file_name) {
            return Err(ResourceError::NotFound(format!(
                "{} (path traversal blocked)",
                file_name
            )));
        }
        fs::read(self.dir.join(file_name))
            .map(Arc::new)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ResourceError::NotFound(file_name.to_string())
                } else {
                    ResourceError::LoadFailed {
                        path: file_name.to_string(),
                        message: e.to_string(),
                    }
                }
            })
    }

    fn name(&self) -> &'static str {
        "FilesystemFontStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn doc(name: &str) -> DocumentName {
        DocumentName::new(name).unwrap()
    }

    #[test]
    fn test_asset_sink_creates_document_dir() {
        let dir = tempdir().unwrap();
        let sink = FilesystemAssetSink::new(dir.path());
        let file = AssetFileName::new(Some("logo"), "png");

        sink.write(&doc("skin"), &file, b"png-bytes").unwrap();

        let written = fs::read(dir.path().join("skin").join("logo.png")).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[test]
    fn test_asset_sink_overwrites() {
        let dir = tempdir().unwrap();
        let sink = FilesystemAssetSink::new(dir.path());
        let file = AssetFileName::new(Some("a"), "png");

        sink.write(&doc("skin"), &file, b"first").unwrap();
        sink.write(&doc("skin"), &file, b"second").unwrap();

        let written = fs::read(dir.path().join("skin/a.png")).unwrap();
        assert_eq!(written, b"second");
    }

    #[test]
    fn test_asset_sink_reports_write_failure() {
        let dir = tempdir().unwrap();
        // A regular file where the document directory should go.
        fs::write(dir.path().join("skin"), b"").unwrap();
        let sink = FilesystemAssetSink::new(dir.path());

        let result = sink.write(&doc("skin"), &AssetFileName::new(Some("a"), "png"), b"x");
        assert!(matches!(result, Err(ResourceError::WriteFailed { .. })));
    }

    #[test]
    fn test_font_store_lists_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("arial.ttf"), b"a").unwrap();
        fs::write(dir.path().join("verdana.ttf"), b"v").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let store = FilesystemFontStore::new(dir.path());
        assert_eq!(store.list().unwrap(), vec!["arial.ttf", "verdana.ttf"]);
    }

    #[test]
    fn test_font_store_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("arial.ttf"), b"font-bytes").unwrap();
        let store = FilesystemFontStore::new(dir.path());

        assert_eq!(&*store.load("arial.ttf").unwrap(), b"font-bytes");
        assert!(matches!(
            store.load("missing.ttf"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_font_store_missing_dir_fails_listing() {
        let dir = tempdir().unwrap();
        let store = FilesystemFontStore::new(dir.path().join("does-not-exist"));
        assert!(matches!(store.list(), Err(ResourceError::LoadFailed { .. })));
    }

    #[test]
    fn test_font_store_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let store = FilesystemFontStore::new(dir.path());

        assert!(store.load("../../../etc/passwd").is_err());
        assert!(store.load("/etc/passwd").is_err());
        assert!(store.load("..").is_err());
        assert!(store.load("nested/font.ttf").is_err());
    }

    #[test]
    fn test_single_component_check() {
        assert!(is_single_component("logo.png"));
        assert!(!is_single_component(""));
        assert!(!is_single_component("."));
        assert!(!is_single_component(".."));
        assert!(!is_single_component("a/b"));
        assert!(!is_single_component("/abs"));
    }
}
