//! Color values understood by drawing surfaces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 24-bit color, printed as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexColor(pub u32);

impl HexColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// CSS form, usable directly as a canvas fill style
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// Color with an alpha channel.
///
/// Used for the background fade: alpha 1.0 clears the previous frame
/// completely, lower values leave a longer trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_display() {
        assert_eq!(HexColor(0x00A1FF).to_string(), "#00A1FF");
        assert_eq!(HexColor::new(255, 0, 16).to_css(), "#FF0010");
    }

    #[test]
    fn test_hex_color_packs_channels() {
        assert_eq!(HexColor::new(0x12, 0x34, 0x56), HexColor(0x123456));
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::new(0, 0, 0, 0.15).to_css(), "rgba(0, 0, 0, 0.15)");
    }
}
