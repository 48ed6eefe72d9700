//! Random wave parameter sampling for field synthesis

use crate::io::configuration::{
    ANGULAR_FREQUENCY_MAX, ANGULAR_FREQUENCY_MIN, WAVE_NUMBER_MAX, WAVE_NUMBER_MIN,
};
use rand::Rng;
use std::f64::consts::TAU;

/// Plane-wave parameters drawn fresh for each generated piece
///
/// Each parameter is sampled independently and none persist beyond a single
/// piece's generation.
#[derive(Debug, Clone, Copy)]
pub struct WaveParameters {
    /// Wave number component along the x axis
    pub wave_number: f64,
    /// Angular frequency component along the y axis
    pub angular_frequency: f64,
    /// Global phase offset in radians
    pub phase: f64,
}

impl WaveParameters {
    /// Draw a fresh parameter set from the given random source
    ///
    /// Wave number and angular frequency are uniform in `[0.5, 2.0]`, the
    /// phase offset uniform in `[0, 2π)`.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            wave_number: rng.random_range(WAVE_NUMBER_MIN..=WAVE_NUMBER_MAX),
            angular_frequency: rng.random_range(ANGULAR_FREQUENCY_MIN..=ANGULAR_FREQUENCY_MAX),
            phase: rng.random_range(0.0..TAU),
        }
    }

    /// Phase of the plane wave at spatial coordinates (x, y)
    pub fn phase_at(&self, x: f64, y: f64) -> f64 {
        self.wave_number
            .mul_add(x, self.angular_frequency.mul_add(y, self.phase))
    }
}
