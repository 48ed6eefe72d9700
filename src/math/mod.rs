//! Mathematical utilities for the rendering pipeline

/// Discrete smoothing filters with explicit boundary handling
pub mod convolution;
/// Piecewise-linear interpolation for gradient value transitions
pub mod interpolation;
