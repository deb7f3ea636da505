//! AssetSink trait for abstracting where exported assets are written.
//!
//! The core never touches the filesystem directly; it hands encoded bytes to
//! a sink keyed by document name and asset filename.

use flatskin_types::{AssetFileName, DocumentName};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource reads and writes.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to write resource '{path}': {message}")]
    WriteFailed { path: String, message: String },

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A destination for exported assets.
///
/// Assets are grouped per document: an implementation must place
/// `(document, file)` so that two documents never share a location, while
/// repeated writes of the same pair replace the earlier bytes.
///
/// # Implementations
///
/// - `FilesystemAssetSink`: `<root>/<document>/<file>` on disk (flatskin-resource)
/// - `InMemoryAssetSink`: a map, for tests and embedding
pub trait AssetSink: Send + Sync + Debug {
    /// Write `data` as `file` under the directory of `document`.
    fn write(
        &self,
        document: &DocumentName,
        file: &AssetFileName,
        data: &[u8],
    ) -> Result<(), ResourceError>;

    /// Returns a human-readable name for this sink (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory asset sink.
///
/// Keeps the latest bytes written for each `document/file` key and counts
/// every write, so overwrites stay observable.
#[derive(Debug, Default)]
pub struct InMemoryAssetSink {
    assets: RwLock<HashMap<String, SharedResourceData>>,
    writes: AtomicUsize,
}

fn key(document: &str, file: &str) -> String {
    format!("{}/{}", document, file)
}

impl InMemoryAssetSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the bytes currently stored for `document/file`.
    ///
    /// Returns `None` if nothing was written or the lock is poisoned.
    pub fn get(&self, document: &str, file: &str) -> Option<SharedResourceData> {
        self.assets.read().ok()?.get(&key(document, file)).cloned()
    }

    /// Number of distinct stored assets. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of successful writes, overwrites included.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl AssetSink for InMemoryAssetSink {
    fn write(
        &self,
        document: &DocumentName,
        file: &AssetFileName,
        data: &[u8],
    ) -> Result<(), ResourceError> {
        let path = key(document.as_str(), file.as_str());
        let mut assets = self.assets.write().map_err(|_| ResourceError::WriteFailed {
            path: path.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(path, Arc::new(data.to_vec()));
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetSink"
    }
}
