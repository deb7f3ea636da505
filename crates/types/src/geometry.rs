use serde::Deserialize;

/// Raw layer bounds as reported by the document model.
///
/// Any edge may be missing; the parser is not trusted to report finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Bounds {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
}

/// Position and size of a layer in document space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl Bounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
        }
    }

    /// Resolves the bounds into a frame.
    ///
    /// Missing or non-finite edges count as 0 and the extent never goes negative.
    pub fn frame(&self) -> Frame {
        let left = finite_or_zero(self.left);
        let top = finite_or_zero(self.top);
        let right = finite_or_zero(self.right);
        let bottom = finite_or_zero(self.bottom);
        Frame {
            x: left,
            y: top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }
}
