//! Newtype wrappers for the names that end up in paths.
//!
//! These keep a validated document name from being mixed up with a raw layer
//! name, and a sanitized asset filename from being mixed up with either.

use std::fmt;
use thiserror::Error;

/// Why a string was rejected as a document name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentNameError {
    #[error("document name is empty")]
    Empty,

    #[error("document name '{0}' is reserved")]
    Reserved(String),

    #[error("document name '{0}' contains a path separator")]
    PathSeparator(String),
}

/// The name a document is exported under.
///
/// It keys the asset directory and appears verbatim in every `src` path, so
/// it must be a single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentName(String);

impl DocumentName {
    pub fn new(name: impl Into<String>) -> Result<Self, DocumentNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DocumentNameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(DocumentNameError::Reserved(name));
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(DocumentNameError::PathSeparator(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A filename made only of `[a-z0-9_-]` plus an extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetFileName(String);

impl AssetFileName {
    /// Sanitizes `stem` and appends `.{extension}`.
    ///
    /// Every character outside `[A-Za-z0-9_-]` becomes `_` and the result is
    /// lower-cased. A missing or empty stem becomes `unnamed`.
    pub fn new(stem: Option<&str>, extension: &str) -> Self {
        Self(format!("{}.{}", sanitize_stem(stem), extension))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Maps an arbitrary name onto the filename alphabet.
pub fn sanitize_stem(stem: Option<&str>) -> String {
    match stem {
        Some(s) if !s.is_empty() => s
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect(),
        _ => "unnamed".to_string(),
    }
}

impl AsRef<str> for AssetFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
