//! Document source abstractions for the pipeline.
//!
//! Parsing a binary layered file is someone else's job. A `DocumentSource`
//! is the boundary where an already-parsed layer tree enters the pipeline.
//!
//! ## Available Sources
//!
//! - `JsonDocumentSource`: a layer tree serialized as JSON (file or string)
//! - `InMemoryDocumentSource`: a `Document` built in code
//!
//! ## Example
//!
//! ```ignore
//! use flatskin_source::{DocumentSource, JsonDocumentSource};
//!
//! let mut source = JsonDocumentSource::from_path("ui/button.json");
//! let document = source.load()?;
//! println!("{} top-level layers", document.children.len());
//! ```

use flatskin_types::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document is not a valid layer tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// A provider of one parsed document.
pub trait DocumentSource: Send {
    /// Produce the document tree.
    ///
    /// Sources are re-readable: calling `load` twice yields the same tree as
    /// long as the underlying data has not changed.
    fn load(&mut self) -> Result<Document, SourceError>;

    /// The original file name of the document, when the source knows it.
    fn file_name(&self) -> Option<String> {
        None
    }
}

enum JsonOrigin {
    File(PathBuf),
    Text(String),
}

/// Reads a JSON-serialized layer tree.
pub struct JsonDocumentSource {
    origin: JsonOrigin,
}

impl JsonDocumentSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            origin: JsonOrigin::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn from_json_str(json: impl Into<String>) -> Self {
        Self {
            origin: JsonOrigin::Text(json.into()),
        }
    }

    /// The file stem of the source path, used as a default document name.
    pub fn file_stem(&self) -> Option<String> {
        match &self.origin {
            JsonOrigin::File(path) => path.file_stem()?.to_str().map(str::to_string),
            JsonOrigin::Text(_) => None,
        }
    }
}

impl DocumentSource for JsonDocumentSource {
    fn load(&mut self) -> Result<Document, SourceError> {
        match &self.origin {
            JsonOrigin::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(serde_json::from_str(&text)?)
            }
            JsonOrigin::Text(text) => Ok(serde_json::from_str(text)?),
        }
    }

    fn file_name(&self) -> Option<String> {
        match &self.origin {
            JsonOrigin::File(path) => path.file_name()?.to_str().map(str::to_string),
            JsonOrigin::Text(_) => None,
        }
    }
}

/// A source backed by a document already in memory.
///
/// This is the simplest source, useful for embedding and testing.
pub struct InMemoryDocumentSource {
    document: Document,
    file_name: Option<String>,
}

impl InMemoryDocumentSource {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

impl DocumentSource for InMemoryDocumentSource {
    fn load(&mut self) -> Result<Document, SourceError> {
        Ok(self.document.clone())
    }

    fn file_name(&self) -> Option<String> {
        self.file_name.clone()
    }
}

// Blanket implementation for Box<dyn DocumentSource>
impl DocumentSource for Box<dyn DocumentSource> {
    fn load(&mut self) -> Result<Document, SourceError> {
        (**self).load()
    }

    fn file_name(&self) -> Option<String> {
        (**self).file_name()
    }
}
