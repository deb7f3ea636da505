//! Output records of a conversion.
//!
//! The scene format is flat: every layer, group placeholders included, is one
//! entry in `layers`, in preorder.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use flatskin_types::{AssetFileName, Frame};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Serializes integral values as JSON integers (`0`, not `0.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl Serialize for Num {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() < MAX_EXACT_INT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// The two record types the scene format knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Text,
    Image,
}

/// One flattened layer record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedLayer {
    pub layer_type: LayerType,
    /// Relative path of the exported asset. Always serialized for image
    /// records (as `null` when absent), never for text records.
    pub src: Option<String>,
    pub name: String,
    pub frame: Frame,
    pub font: Option<String>,
    pub justification: Option<String>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub text: Option<String>,
}

impl ExportedLayer {
    pub fn new(layer_type: LayerType, name: impl Into<String>, frame: Frame) -> Self {
        Self {
            layer_type,
            src: None,
            name: name.into(),
            frame,
            font: None,
            justification: None,
            color: None,
            size: None,
            text: None,
        }
    }
}

impl Serialize for ExportedLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.layer_type)?;
        if self.layer_type == LayerType::Image {
            map.serialize_entry("src", &self.src)?;
        }
        if let Some(font) = &self.font {
            map.serialize_entry("font", font)?;
        }
        if let Some(justification) = &self.justification {
            map.serialize_entry("justification", justification)?;
        }
        if let Some(color) = &self.color {
            map.serialize_entry("color", color)?;
        }
        if let Some(size) = self.size {
            map.serialize_entry("size", &Num(size))?;
        }
        if let Some(text) = &self.text {
            map.serialize_entry("text", text)?;
        }
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("x", &Num(self.frame.x))?;
        map.serialize_entry("y", &Num(self.frame.y))?;
        map.serialize_entry("width", &Num(self.frame.width))?;
        map.serialize_entry("height", &Num(self.frame.height))?;
        map.end()
    }
}

/// An exported PNG: its file name and bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedAsset {
    pub name: AssetFileName,
    pub data: Vec<u8>,
}

impl ExportedAsset {
    /// `data:image/png;base64,...`
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64_STANDARD.encode(&self.data))
    }
}

impl Serialize for ExportedAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", self.name.as_str())?;
        map.serialize_entry("data", &self.data_uri())?;
        map.end()
    }
}

/// Static metadata block of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneInfo {
    pub description: String,
    pub file: String,
    pub date: String,
    pub title: String,
    pub author: String,
    pub keywords: String,
    pub generator: String,
}

/// The envelope handed to the downstream renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub name: String,
    pub path: String,
    pub info: SceneInfo,
    pub layers: Vec<ExportedLayer>,
}

/// Everything one conversion produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub document: Scene,
    pub images: Vec<ExportedAsset>,
    pub fonts: Vec<String>,
}

impl Conversion {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A font file fetched from the font store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFile {
    pub name: String,
    /// Base64 of the file contents.
    pub data: String,
}
