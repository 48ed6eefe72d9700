//! Error types for generation and serialization operations

use crate::math::interpolation::InterpolationError;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum ArtError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to serialize a collection to JSON
    Serialize {
        /// Path where serialization was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Serialize { path, source } => {
                write!(
                    f,
                    "Failed to serialize collection to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, ArtError>;

impl From<InterpolationError> for ArtError {
    fn from(err: InterpolationError) -> Self {
        Self::Computation {
            operation: "gradient interpolation",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtError {
    ArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("size", &0, &"grid resolution must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'size' = '0': grid resolution must be positive"
        );
    }

    #[test]
    fn test_interpolation_error_converts_to_computation() {
        let result = crate::math::interpolation::Linear::new(vec![0.0], vec![1.0]);
        let err: ArtError = result.expect_err("single knot must be rejected").into();
        match err {
            ArtError::Computation { operation, .. } => {
                assert_eq!(operation, "gradient interpolation");
            }
            _ => unreachable!("Expected Computation error type"),
        }
    }
}
