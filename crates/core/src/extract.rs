//! Per-node attribute extraction. Pure functions, no I/O.

use crate::scene::{ExportedLayer, LayerType};
use flatskin_types::{Color, LayerKind, LayerNode, TextContent};

/// Collapses the four-way classification into the scene's two record types.
///
/// Groups and "other" nodes come out as `image` placeholders.
pub fn layer_type(kind: &LayerKind<'_>) -> LayerType {
    match kind {
        LayerKind::Text(_) => LayerType::Text,
        LayerKind::Group(_) | LayerKind::Image(_) | LayerKind::Other => LayerType::Image,
    }
}

/// Record name: the node's own name, or `layer_<exported>` when it has none.
pub fn record_name(node: &LayerNode, exported: usize) -> String {
    match node.display_name() {
        Some(name) => name.to_string(),
        None => format!("layer_{}", exported),
    }
}

/// Builds the record every node gets: type, name and frame.
pub fn base_layer(node: &LayerNode, kind: &LayerKind<'_>, exported: usize) -> ExportedLayer {
    ExportedLayer::new(
        layer_type(kind),
        record_name(node, exported),
        node.bounds.frame(),
    )
}

/// Copies the text attributes that are present. Nothing is defaulted.
pub fn apply_text(layer: &mut ExportedLayer, text: &TextContent) {
    if let Some(font) = &text.font {
        layer.font = font.name.clone();
        layer.color = font
            .colors
            .first()
            .and_then(|c| Color::from_channels(c))
            .map(|c| c.to_hex_literal());
        layer.size = font.sizes.first().copied();
    }
    layer.justification = text.alignment.clone();
    layer.text = text.text.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatskin_types::{Bounds, FontSpec, Frame, RasterData};

    #[test]
    fn test_layer_type_collapse() {
        let text = TextContent::default();
        let raster = RasterData::Png(vec![]);
        let children = [LayerNode::default()];
        assert_eq!(layer_type(&LayerKind::Text(&text)), LayerType::Text);
        assert_eq!(layer_type(&LayerKind::Image(&raster)), LayerType::Image);
        assert_eq!(layer_type(&LayerKind::Group(&children)), LayerType::Image);
        assert_eq!(layer_type(&LayerKind::Other), LayerType::Image);
    }

    #[test]
    fn test_record_name_fallback_uses_counter() {
        let node = LayerNode::default();
        assert_eq!(record_name(&node, 0), "layer_0");
        assert_eq!(record_name(&node, 7), "layer_7");

        let named = LayerNode::group("Header", Bounds::default(), vec![]);
        assert_eq!(record_name(&named, 7), "Header");
    }

    #[test]
    fn test_base_layer_geometry() {
        let node = LayerNode::raster(
            "I",
            Bounds::new(5.0, 6.0, 1.0, 16.0),
            RasterData::Png(vec![]),
        );
        let layer = base_layer(&node, &node.kind(), 0);
        assert_eq!(layer.layer_type, LayerType::Image);
        assert_eq!(
            layer.frame,
            Frame {
                x: 5.0,
                y: 6.0,
                width: 0.0,
                height: 10.0
            }
        );
        assert_eq!(layer.src, None);
    }

    #[test]
    fn test_apply_full_text() {
        let text = TextContent {
            text: Some("Hi".into()),
            font: Some(FontSpec {
                name: Some("Arial".into()),
                colors: vec![vec![255.0, 0.0, 0.0], vec![0.0, 0.0, 255.0]],
                sizes: vec![24.0, 12.0],
            }),
            alignment: Some("center".into()),
        };
        let mut layer = ExportedLayer::new(LayerType::Text, "T", Frame::default());
        apply_text(&mut layer, &text);

        assert_eq!(layer.font.as_deref(), Some("Arial"));
        assert_eq!(layer.color.as_deref(), Some("0xff0000"));
        assert_eq!(layer.size, Some(24.0));
        assert_eq!(layer.justification.as_deref(), Some("center"));
        assert_eq!(layer.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_apply_sparse_text() {
        let text = TextContent {
            text: Some("Hi".into()),
            font: Some(FontSpec {
                name: None,
                colors: vec![vec![1.0, 2.0]],
                sizes: vec![],
            }),
            alignment: None,
        };
        let mut layer = ExportedLayer::new(LayerType::Text, "T", Frame::default());
        apply_text(&mut layer, &text);

        assert_eq!(layer.font, None);
        assert_eq!(layer.color, None);
        assert_eq!(layer.size, None);
        assert_eq!(layer.justification, None);
        assert_eq!(layer.text.as_deref(), Some("Hi"));
    }
}
