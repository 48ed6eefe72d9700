//! Piecewise-linear interpolation over fixed knot sequences
//!
//! Deliberately linear rather than smooth: gradient anchors must be hit
//! exactly and values between adjacent anchors must vary linearly, so each
//! segment is a straight line with no continuity conditions across knots.

use std::error::Error;
use std::fmt;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Piecewise-linear interpolation through a set of data points
///
/// Knot x values must be strictly increasing. Evaluation between two knots
/// is an affine blend of their y values; outside the knot range the nearest
/// boundary value is returned.
#[derive(Debug, Clone)]
pub struct Linear {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Linear {
    /// Create a new linear interpolation from x and y values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `x_values` and `y_values` have different lengths
    /// - Fewer than 2 data points are provided
    /// - The x values are not strictly increasing
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Result<Self, InterpolationError> {
        if x_values.len() != y_values.len() {
            return Err(InterpolationError::new(
                "x_values and y_values must have the same length",
            ));
        }

        if x_values.len() < 2 {
            return Err(InterpolationError::new(
                "Need at least 2 points for interpolation",
            ));
        }

        for pair in x_values.windows(2) {
            let increasing = pair
                .first()
                .zip(pair.get(1))
                .is_some_and(|(lower, upper)| lower < upper);
            if !increasing {
                return Err(InterpolationError::new(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self { x_values, y_values })
    }

    /// Evaluate the interpolation at point x
    ///
    /// Uses binary search to find the appropriate segment, then blends the
    /// segment's endpoint values linearly. Points outside the data range
    /// return the nearest boundary value.
    ///
    /// # Errors
    ///
    /// Returns an error if internal index access fails, which cannot happen
    /// for a successfully constructed interpolation.
    pub fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        let n = self.x_values.len();

        let first_x = self
            .x_values
            .first()
            .ok_or_else(|| InterpolationError::new("No x values"))?;
        let first_y = self
            .y_values
            .first()
            .ok_or_else(|| InterpolationError::new("No y values"))?;

        if x <= *first_x {
            return Ok(*first_y);
        }

        let last_x = self
            .x_values
            .get(n - 1)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let last_y = self
            .y_values
            .get(n - 1)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;

        if x >= *last_x {
            return Ok(*last_y);
        }

        let mut klo = 0;
        let mut khi = n - 1;
        while khi - klo > 1 {
            let k = usize::midpoint(khi, klo);
            let x_k = self
                .x_values
                .get(k)
                .ok_or_else(|| InterpolationError::new("Invalid index"))?;
            if *x_k > x {
                khi = k;
            } else {
                klo = k;
            }
        }

        let x_khi = self
            .x_values
            .get(khi)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let x_klo = self
            .x_values
            .get(klo)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let y_khi = self
            .y_values
            .get(khi)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let y_klo = self
            .y_values
            .get(klo)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;

        let h = x_khi - x_klo;
        let a = (x_khi - x) / h;
        let b = (x - x_klo) / h;

        Ok(a.mul_add(*y_klo, b * y_khi))
    }
}
