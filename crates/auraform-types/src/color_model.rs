// ABOUTME: RGB and HSL color representations shared by every auraform crate
// ABOUTME: Plain integer triples; range handling lives in the conversion layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color with integer channels.
///
/// Channels are nominally 0-255 but may hold out-of-range values produced by
/// intermediate arithmetic. They are clamped when serialized to hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RgbColor {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channels in `r, g, b` order
    pub const fn channels(self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL color with rounded integer components.
///
/// `h` is in degrees (0-360), `s` and `l` are percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HslColor {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

impl HslColor {
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
