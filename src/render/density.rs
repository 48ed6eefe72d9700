//! Density shaping transforms between smoothing and color mapping

use ndarray::Array2;

/// Compress dynamic range by applying `log(1 + x)` to every cell
///
/// Quantum densities can carry large peaks; flattening them ahead of color
/// mapping keeps the gradient from collapsing everything else to black.
pub fn compress_contrast(density: &mut Array2<f64>) {
    density.mapv_inplace(f64::ln_1p);
}

/// Rescale all cells linearly so the minimum maps to 0 and the maximum to 1
///
/// A degenerate flat grid (minimum equals maximum) maps every cell to 0
/// rather than dividing by zero; no NaN can reach the hex encoder.
pub fn normalize(density: &mut Array2<f64>) {
    let min = density.iter().copied().fold(f64::INFINITY, f64::min);
    let max = density.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range < f64::EPSILON {
        density.fill(0.0);
        return;
    }

    density.mapv_inplace(|value| (value - min) / range);
}
