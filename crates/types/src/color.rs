use std::fmt;

/// An opaque RGB color as emitted into the scene description.
///
/// Alpha is not carried: the scene format only knows `0xrrggbb` literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a document channel sequence `[r, g, b, (a)]`.
    ///
    /// Returns `None` when fewer than three channels are present. Channels are
    /// rounded and clamped into `0..=255`; any fourth channel is ignored.
    pub fn from_channels(channels: &[f64]) -> Option<Self> {
        match channels {
            [r, g, b, ..] => Some(Self {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
            }),
            _ => None,
        }
    }

    /// Formats the color as a `0x`-prefixed, lower-case hex literal.
    pub fn to_hex_literal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
