//! Rendered image records and hex color encoding

use serde::{Deserialize, Serialize};

/// A rendered piece: a row-major grid of hex color codes plus dimensions
///
/// Field names and order are part of the serialized contract; `pixels`
/// holds exactly `height` rows of `width` entries, every entry a lowercase
/// `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    /// Hex color codes, indexed `[row][column]`
    pub pixels: Vec<Vec<String>>,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

/// Encode a unit-interval RGB triple as a lowercase `#rrggbb` string
///
/// Channels are quantized to 8-bit by truncation, not rounding.
pub fn encode_hex(rgb: [f64; 3]) -> String {
    let [red, green, blue] = rgb.map(|channel| (channel.clamp(0.0, 1.0) * 255.0) as u8);
    format!("#{red:02x}{green:02x}{blue:02x}")
}
