//! Generation constants and output settings

// Field synthesis constants
/// Grid resolution for generated fields (cells per side)
pub const GRID_SIZE: usize = 512;

/// Lower bound of the spatial domain on both axes
pub const DOMAIN_MIN: f64 = -10.0;

/// Upper bound of the spatial domain on both axes
pub const DOMAIN_MAX: f64 = 10.0;

/// Minimum wave number
pub const WAVE_NUMBER_MIN: f64 = 0.5;

/// Maximum wave number
pub const WAVE_NUMBER_MAX: f64 = 2.0;

/// Minimum angular frequency
pub const ANGULAR_FREQUENCY_MIN: f64 = 0.5;

/// Maximum angular frequency
pub const ANGULAR_FREQUENCY_MAX: f64 = 2.0;

/// Standard deviation of the per-cell Gaussian phase perturbation
pub const PHASE_NOISE_SIGMA: f64 = 0.1;

// Output settings
/// Number of pieces generated per run
pub const COLLECTION_SIZE: usize = 5;

/// Output file written to the working directory
pub const OUTPUT_FILE: &str = "quantum_art.json";
