//! Five-anchor color gradient mapping normalized density to RGB
//!
//! The gradient is fixed across all generated pieces: black, green, cyan,
//! magenta, yellow, with anchors evenly spaced over `[0, 1]`. Each channel
//! interpolates independently and linearly between the two nearest anchors.

use crate::math::interpolation::{InterpolationError, Linear};

/// Gradient anchor colors as unit-interval RGB triples
///
/// In order: `#000000`, `#00ff00`, `#00ffff`, `#ff00ff`, `#ffff00`.
pub const GRADIENT_ANCHORS: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

/// Piecewise-linear color gradient with one interpolator per channel
#[derive(Debug, Clone)]
pub struct ColorGradient {
    red: Linear,
    green: Linear,
    blue: Linear,
}

impl ColorGradient {
    /// Build the fixed quantum gradient
    ///
    /// # Errors
    ///
    /// Returns an error if interpolator construction fails, which cannot
    /// happen for the fixed anchor set.
    pub fn quantum() -> Result<Self, InterpolationError> {
        Ok(Self {
            red: Linear::new(anchor_positions(), channel_knots(0))?,
            green: Linear::new(anchor_positions(), channel_knots(1))?,
            blue: Linear::new(anchor_positions(), channel_knots(2))?,
        })
    }

    /// Map a normalized scalar in `[0, 1]` to an RGB triple
    ///
    /// # Errors
    ///
    /// Returns an error if channel evaluation fails, which cannot happen
    /// for a successfully constructed gradient.
    pub fn sample(&self, value: f64) -> Result<[f64; 3], InterpolationError> {
        Ok([
            self.red.evaluate(value)?,
            self.green.evaluate(value)?,
            self.blue.evaluate(value)?,
        ])
    }
}

// Anchors sit at 0, 0.25, 0.5, 0.75, 1
fn anchor_positions() -> Vec<f64> {
    let last = GRADIENT_ANCHORS.len() - 1;
    (0..=last).map(|index| index as f64 / last as f64).collect()
}

fn channel_knots(channel: usize) -> Vec<f64> {
    GRADIENT_ANCHORS
        .iter()
        .map(|anchor| anchor.get(channel).copied().unwrap_or_default())
        .collect()
}
