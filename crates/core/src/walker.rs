//! Preorder flattening of the layer tree.

use crate::export::AssetExporter;
use crate::extract::{apply_text, base_layer};
use crate::scene::{ExportedAsset, ExportedLayer};
use flatskin_types::{LayerKind, LayerNode};

/// Accumulator threaded through the whole traversal.
///
/// `exported` counts successful asset exports so far; it names unnamed nodes
/// and is never reset between branches.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WalkState {
    pub exported: usize,
    pub assets: Vec<ExportedAsset>,
}

/// Flattens a layer tree into scene records, exporting raster leaves on the way.
#[derive(Debug, Clone, Copy)]
pub struct LayerWalker<'a> {
    exporter: AssetExporter<'a>,
}

impl<'a> LayerWalker<'a> {
    pub fn new(exporter: AssetExporter<'a>) -> Self {
        Self { exporter }
    }

    /// Walks `nodes` in document order and returns the flattened records.
    pub fn walk(&self, nodes: &[LayerNode], state: &mut WalkState) -> Vec<ExportedLayer> {
        let mut layers = Vec::new();
        self.walk_into(nodes, state, &mut layers);
        layers
    }

    fn walk_into(&self, nodes: &[LayerNode], state: &mut WalkState, out: &mut Vec<ExportedLayer>) {
        for node in nodes {
            let kind = node.kind();
            let mut layer = base_layer(node, &kind, state.exported);

            match kind {
                LayerKind::Image(raster) => {
                    match self.exporter.export(node, raster, state.exported) {
                        Ok(exported) => {
                            layer.src = Some(exported.src);
                            state.assets.push(exported.asset);
                            state.exported += 1;
                        }
                        Err(e) => log::warn!("Skipping layer '{}': {}", layer.name, e),
                    }
                }
                LayerKind::Text(text) => apply_text(&mut layer, text),
                LayerKind::Group(_) | LayerKind::Other => {}
            }

            // Only a raster leaf without an asset is dropped; groups and
            // "other" nodes stay as placeholders.
            if !(kind.is_image() && layer.src.is_none()) {
                out.push(layer);
            }

            if let LayerKind::Group(children) = kind {
                self.walk_into(children, state, out);
            }
        }
    }
}
