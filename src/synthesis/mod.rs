//! Wavefunction synthesis from randomly drawn wave parameters
//!
//! This module contains the field synthesizer:
//! - Per-piece random wave parameter sampling
//! - Plane-wave construction over the fixed spatial domain
//! - Gaussian phase perturbation

/// Random wave parameter sampling
pub mod parameters;
/// Complex field construction and phase noise
pub mod wavefunction;

pub use parameters::WaveParameters;
pub use wavefunction::Field;
