//! FontStore trait for abstracting the font-file directory.

use crate::resource::{ResourceError, SharedResourceData};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// A flat collection of font files addressed by file name (e.g. `arial.ttf`).
pub trait FontStore: Send + Sync + Debug {
    /// List the file names available in the store.
    fn list(&self) -> Result<Vec<String>, ResourceError>;

    /// Read one font file.
    fn load(&self, file_name: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A font store pre-populated in memory.
#[derive(Debug, Default)]
pub struct InMemoryFontStore {
    fonts: RwLock<BTreeMap<String, SharedResourceData>>,
}

impl InMemoryFontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font file.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::WriteFailed` if the internal lock is poisoned.
    pub fn add(&self, file_name: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let file_name = file_name.into();
        let mut fonts = self.fonts.write().map_err(|_| ResourceError::WriteFailed {
            path: file_name.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert(file_name, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FontStore for InMemoryFontStore {
    fn list(&self) -> Result<Vec<String>, ResourceError> {
        let fonts = self.fonts.read().map_err(|_| ResourceError::LoadFailed {
            path: String::new(),
            message: "font store lock poisoned".to_string(),
        })?;
        Ok(fonts.keys().cloned().collect())
    }

    fn load(&self, file_name: &str) -> Result<SharedResourceData, ResourceError> {
        let fonts = self.fonts.read().map_err(|_| ResourceError::LoadFailed {
            path: file_name.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts
            .get(file_name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(file_name.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryFontStore"
    }
}
