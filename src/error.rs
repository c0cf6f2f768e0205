//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Provides detailed context about failures including out-of-range
/// indices, dimension mismatches, non-square inputs, and singular matrices.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Cell coordinates outside the matrix bounds.
    IndexOutOfRange {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (close to zero)
        det: f64,
    },

    /// Storage name is blank or otherwise unusable.
    InvalidName {
        /// Offending name
        name: String,
    },

    /// Storage name already bound to another matrix.
    NameTaken {
        /// Offending name
        name: String,
    },

    /// No stored matrix under the requested name.
    NotFound {
        /// Requested name
        name: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Operation requires a square matrix, got {rows}x{cols}")
            }
            MatrizError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            MatrizError::InvalidName { name } => {
                write!(f, "Invalid matrix name: {name:?}")
            }
            MatrizError::NameTaken { name } => {
                write!(f, "A matrix named {name:?} already exists")
            }
            MatrizError::NotFound { name } => {
                write!(f, "No matrix named {name:?}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
