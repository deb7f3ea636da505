//! The in-memory document model handed over by the document parser.
//!
//! Every field mirrors what the parser may or may not report, so almost
//! everything is optional. The core only ever reads these types.

use crate::geometry::Bounds;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Deserializer, de};

/// Root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub children: Vec<LayerNode>,
}

impl Document {
    pub fn new(width: f64, height: f64, children: Vec<LayerNode>) -> Self {
        Self {
            width,
            height,
            children,
        }
    }

    /// A document is usable only when both dimensions are finite and non-zero.
    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|d| d.is_finite() && *d != 0.0)
    }
}

/// One element of the layer tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayerNode {
    pub name: Option<String>,
    pub bounds: Bounds,
    pub children: Vec<LayerNode>,
    pub text: Option<TextContent>,
    pub raster: Option<RasterData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub text: Option<String>,
    pub font: Option<FontSpec>,
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub name: Option<String>,
    /// One `[r, g, b, (a)]` entry per styled run.
    pub colors: Vec<Vec<f64>>,
    pub sizes: Vec<f64>,
}

/// Pixel data attached to a raster layer.
#[derive(Clone, PartialEq)]
pub enum RasterData {
    /// Bytes that are already PNG-encoded.
    Png(Vec<u8>),
    /// Straight (non-premultiplied) RGBA8 pixels, row-major.
    Rgba {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
}

impl std::fmt::Debug for RasterData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterData::Png(bytes) => f.debug_tuple("Png").field(&bytes.len()).finish(),
            RasterData::Rgba {
                width,
                height,
                pixels,
            } => f
                .debug_struct("Rgba")
                .field("width", width)
                .field("height", height)
                .field("pixels", &pixels.len())
                .finish(),
        }
    }
}

impl<'de> Deserialize<'de> for RasterData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum RasterDef {
            Png(String),
            Rgba {
                width: u32,
                height: u32,
                pixels: String,
            },
        }

        let decode = |payload: &str| {
            BASE64_STANDARD
                .decode(payload)
                .map_err(|e| de::Error::custom(format!("invalid base64 raster payload: {}", e)))
        };

        match RasterDef::deserialize(deserializer)? {
            RasterDef::Png(payload) => Ok(RasterData::Png(decode(&payload)?)),
            RasterDef::Rgba {
                width,
                height,
                pixels,
            } => Ok(RasterData::Rgba {
                width,
                height,
                pixels: decode(&pixels)?,
            }),
        }
    }
}

/// Classification of a node, in strict priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerKind<'a> {
    Group(&'a [LayerNode]),
    Text(&'a TextContent),
    Image(&'a RasterData),
    Other,
}

impl LayerKind<'_> {
    pub fn is_text(&self) -> bool {
        matches!(self, LayerKind::Text(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, LayerKind::Image(_))
    }
}

impl LayerNode {
    pub fn group(name: impl Into<String>, bounds: Bounds, children: Vec<LayerNode>) -> Self {
        Self {
            name: Some(name.into()),
            bounds,
            children,
            ..Default::default()
        }
    }

    pub fn text(name: impl Into<String>, bounds: Bounds, text: TextContent) -> Self {
        Self {
            name: Some(name.into()),
            bounds,
            text: Some(text),
            ..Default::default()
        }
    }

    pub fn raster(name: impl Into<String>, bounds: Bounds, raster: RasterData) -> Self {
        Self {
            name: Some(name.into()),
            bounds,
            raster: Some(raster),
            ..Default::default()
        }
    }

    /// The node's name, treating an empty string as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Classifies the node. Children win over everything else, then
    /// non-empty text, then a raster.
    pub fn kind(&self) -> LayerKind<'_> {
        if !self.children.is_empty() {
            return LayerKind::Group(&self.children);
        }
        if let Some(text) = &self.text
            && text.text.as_deref().is_some_and(|t| !t.is_empty())
        {
            return LayerKind::Text(text);
        }
        match &self.raster {
            Some(raster) => LayerKind::Image(raster),
            None => LayerKind::Other,
        }
    }

    /// The font name used by this node's text, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.text
            .as_ref()?
            .font
            .as_ref()?
            .name
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> TextContent {
        TextContent {
            text: Some("hello".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_children_make_a_group() {
        let mut node = LayerNode::text("t", Bounds::default(), hello());
        node.raster = Some(RasterData::Png(vec![]));
        node.children.push(LayerNode::default());
        assert!(matches!(node.kind(), LayerKind::Group(children) if children.len() == 1));
    }

    #[test]
    fn test_text_beats_raster() {
        let mut node = LayerNode::text("t", Bounds::default(), hello());
        node.raster = Some(RasterData::Png(vec![1]));
        assert!(node.kind().is_text());
    }

    #[test]
    fn test_empty_text_falls_through() {
        let mut node = LayerNode::raster("r", Bounds::default(), RasterData::Png(vec![1]));
        node.text = Some(TextContent {
            text: Some(String::new()),
            ..Default::default()
        });
        assert!(node.kind().is_image());

        node.raster = None;
        assert_eq!(node.kind(), LayerKind::Other);
    }

    #[test]
    fn test_display_name_ignores_empty() {
        let mut node = LayerNode::default();
        assert_eq!(node.display_name(), None);
        node.name = Some(String::new());
        assert_eq!(node.display_name(), None);
        node.name = Some("Logo".to_string());
        assert_eq!(node.display_name(), Some("Logo"));
    }

    #[test]
    fn test_font_name_lookup() {
        let node = LayerNode::text(
            "t",
            Bounds::default(),
            TextContent {
                font: Some(FontSpec {
                    name: Some("Arial".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        assert_eq!(node.font_name(), Some("Arial"));
        assert_eq!(LayerNode::default().font_name(), None);
    }

    #[test]
    fn test_document_dimensions() {
        assert!(Document::new(400.0, 300.0, vec![]).has_valid_dimensions());
        assert!(!Document::new(0.0, 300.0, vec![]).has_valid_dimensions());
        assert!(!Document::new(400.0, f64::NAN, vec![]).has_valid_dimensions());
    }

    #[test]
    fn test_deserialize_tree() {
        let json = r#"{
            "width": 10, "height": 20,
            "children": [
                { "name": "G", "children": [
                    { "name": "T", "text": { "text": "Hi", "font": { "name": "Arial", "colors": [[1,2,3]], "sizes": [12] } } },
                    { "name": "I", "raster": { "png": "iVBORw0KGgo=" } },
                    { "raster": { "rgba": { "width": 1, "height": 1, "pixels": "AAAA/w==" } } }
                ] }
            ]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.width, 10.0);
        let group = &doc.children[0];
        assert!(matches!(group.kind(), LayerKind::Group(_)));
        assert_eq!(group.children[0].font_name(), Some("Arial"));
        assert_eq!(
            group.children[1].raster,
            Some(RasterData::Png(vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]))
        );
        assert_eq!(
            group.children[2].raster,
            Some(RasterData::Rgba {
                width: 1,
                height: 1,
                pixels: vec![0, 0, 0, 255]
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_base64() {
        let json = r#"{ "raster": { "png": "not base64!" } }"#;
        let err = serde_json::from_str::<LayerNode>(json).unwrap_err();
        assert!(err.to_string().contains("invalid base64"));
    }
}
