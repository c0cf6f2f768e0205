//! Determinant by recursive Laplace (cofactor) expansion.
//!
//! The cofactor expansion is the specified algorithm for this engine: its
//! sign convention and behavior on degenerate matrices are observable, so it
//! is not replaced by an LU-based shortcut despite the `O(n!)` cost. Callers
//! with latency bounds should gate the input size themselves.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input.
    pub fn determinant(&self) -> Result<f64> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }
        Ok(det_recursive(self.as_slice(), rows))
    }
}

/// Laplace expansion on a flat row-major n x n buffer.
fn det_recursive(m: &[f64], n: usize) -> f64 {
    if n == 1 {
        return m[0];
    }
    if n == 2 {
        return m[0] * m[3] - m[1] * m[2];
    }

    let mut det = 0.0;
    for j in 0..n {
        let minor = first_row_minor(m, n, j);
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * m[j] * det_recursive(&minor, n - 1);
    }
    det
}

/// Copies the (n-1) x (n-1) minor that drops row 0 and column `col`.
fn first_row_minor(m: &[f64], n: usize, col: usize) -> Vec<f64> {
    let mut minor = Vec::with_capacity((n - 1) * (n - 1));
    for i in 1..n {
        for k in 0..n {
            if k != col {
                minor.push(m[i * n + k]);
            }
        }
    }
    minor
}

#[cfg(test)]
#[path = "determinant_tests.rs"]
mod tests;
