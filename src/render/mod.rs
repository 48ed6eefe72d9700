//! Probability density rendering and color mapping
//!
//! This module contains the density renderer:
//! - Density shaping (smoothing, contrast compression, normalization)
//! - Five-anchor color gradient mapping
//! - Hex-encoded image assembly

/// Five-anchor color gradient over piecewise-linear interpolation
pub mod colormap;
/// Density shaping transforms
pub mod density;
/// Rendered image records and hex color encoding
pub mod image;

pub use image::RenderedImage;

use crate::io::error::Result;
use crate::math::convolution::uniform_filter_3x3;
use crate::render::colormap::ColorGradient;
use crate::render::density::{compress_contrast, normalize};
use crate::render::image::encode_hex;
use crate::synthesis::Field;

/// Render a field into a grid of hex color codes
///
/// Steps run to completion in order: magnitude-squared density, 3×3
/// uniform smoothing, `log(1 + x)` contrast compression, min/max
/// normalization into `[0, 1]`, gradient color mapping, hex encoding.
/// The output is row-major with `width` and `height` equal to the field
/// size.
///
/// # Errors
///
/// Returns an error if gradient interpolation fails, which cannot happen
/// for the fixed anchor set.
pub fn render(field: &Field) -> Result<RenderedImage> {
    let mut density = field.probability_density();
    density = uniform_filter_3x3(&density);
    compress_contrast(&mut density);
    normalize(&mut density);

    let gradient = ColorGradient::quantum()?;
    let size = field.size();

    let mut pixels = Vec::with_capacity(size);
    for row in density.outer_iter() {
        let mut encoded_row = Vec::with_capacity(size);
        for value in row {
            encoded_row.push(encode_hex(gradient.sample(*value)?));
        }
        pixels.push(encoded_row);
    }

    Ok(RenderedImage {
        pixels,
        width: size,
        height: size,
    })
}
