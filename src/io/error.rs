//! Error types for grid assembly, materialization and terrain access

use std::fmt;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Terrain sample shape does not match the configured grid
    ///
    /// Raised before any cell is created, so the previously assembled
    /// grid is left untouched.
    TerrainDimensionMismatch {
        /// Grid shape the sample should have (rows, cols)
        expected: (usize, usize),
        /// Shape of the supplied sample (rows, cols)
        actual: (usize, usize),
    },

    /// Terrain source still has no map after being asked to generate one
    TerrainUnavailable {
        /// Name of the source that failed to provide data
        source_name: &'static str,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Materializer stepped against a grid from a different generation
    StaleMaterialization {
        /// Generation the materializer was created for
        expected: u64,
        /// Generation currently held by the grid
        found: Option<u64>,
    },

    /// Numerical or structural computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TerrainDimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Terrain sample is {}x{} but the grid expects {}x{} (rows x cols)",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::TerrainUnavailable { source_name } => {
                write!(f, "Terrain source '{source_name}' produced no terrain map")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::StaleMaterialization { expected, found } => match found {
                Some(found) => write!(
                    f,
                    "Materializer belongs to grid generation {expected} but the grid is at generation {found}"
                ),
                None => write!(
                    f,
                    "Materializer belongs to grid generation {expected} but the grid is empty"
                ),
            },
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Computation {
            operation: "array shaping",
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GridError {
    GridError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
