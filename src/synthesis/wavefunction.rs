//! Complex wavefunction construction over a fixed spatial domain
//!
//! Fields are square grids of unit-modulus complex values sampled from a
//! plane wave, then perturbed per cell by a Gaussian phase factor. The
//! perturbation changes phase only; amplitude stays 1 until the density
//! computation squares it away entirely.

use crate::io::configuration::{DOMAIN_MAX, DOMAIN_MIN, PHASE_NOISE_SIGMA};
use crate::synthesis::parameters::WaveParameters;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;

/// A square complex-valued field representing a synthetic quantum-like wave
///
/// Row index corresponds to the y coordinate, column index to x. Both axes
/// span the same fixed real interval, so the field is always square.
#[derive(Debug, Clone)]
pub struct Field {
    values: Array2<Complex64>,
    size: usize,
}

impl Field {
    /// Build a unit-amplitude plane wave `exp(i·(k·x + w·y + phase))`
    ///
    /// Coordinate axes are `size` evenly spaced values over the fixed
    /// spatial domain. Every cell has modulus exactly 1 by construction.
    pub fn plane_wave(size: usize, parameters: &WaveParameters) -> Self {
        let axis = Array1::linspace(DOMAIN_MIN, DOMAIN_MAX, size);
        let mut values = Array2::zeros((size, size));

        for (y, mut row) in axis.iter().zip(values.outer_iter_mut()) {
            for (x, value) in axis.iter().zip(row.iter_mut()) {
                *value = Complex64::from_polar(1.0, parameters.phase_at(*x, *y));
            }
        }

        Self { values, size }
    }

    /// Multiply each cell by an independent unit-magnitude phase factor
    ///
    /// The per-cell perturbation is Gaussian with mean 0 and standard
    /// deviation [`PHASE_NOISE_SIGMA`]; moduli are unaffected.
    pub fn apply_phase_noise<R: Rng>(&mut self, rng: &mut R) {
        for value in &mut self.values {
            let perturbation: f64 = rng.sample(StandardNormal);
            *value *= Complex64::from_polar(1.0, perturbation * PHASE_NOISE_SIGMA);
        }
    }

    /// Synthesize a complete field: fresh parameters, plane wave, phase noise
    pub fn synthesize<R: Rng>(size: usize, rng: &mut R) -> Self {
        let parameters = WaveParameters::sample(rng);
        let mut field = Self::plane_wave(size, &parameters);
        field.apply_phase_noise(rng);
        field
    }

    /// Grid resolution (cells per side)
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The raw complex grid
    pub const fn values(&self) -> &Array2<Complex64> {
        &self.values
    }

    /// Probability density `|ψ|²` per cell
    pub fn probability_density(&self) -> Array2<f64> {
        self.values.mapv(|psi| psi.norm_sqr())
    }
}
