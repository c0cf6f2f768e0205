//! Eigenvalue approximation by the unshifted QR algorithm.
//!
//! The iteration repeatedly factors the current iterate with classical
//! Gram-Schmidt and reassembles it as `R * Q`, driving off-diagonal mass
//! toward zero. Classical (non-reorthogonalized) Gram-Schmidt loses
//! orthogonality on ill-conditioned or nearly-dependent columns, and the
//! unshifted iteration can stall on repeated or close eigenvalues; both are
//! accepted limits of this engine. Only real eigenvalues come out of this
//! path, and the results are reliable mainly for symmetric matrices with
//! well-separated spectra.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Vector};

/// Iteration cap for the QR loop. Fixed, not part of the public contract.
const MAX_ITERATIONS: usize = 100;

/// Off-diagonal mass below which the iterate counts as converged, and the
/// column-norm floor under which a Gram-Schmidt column stays zero.
const CONVERGENCE_TOLERANCE: f64 = 1e-10;

impl Matrix<f64> {
    /// Approximates the eigenvalues via up to 100 unshifted QR iterations.
    ///
    /// Returns the diagonal of the final iterate in matrix-position order
    /// (never sorted), whether or not the off-diagonal sum converged below
    /// `1e-10`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input.
    pub fn eigenvalues(&self) -> Result<Vec<f64>> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }

        let mut a = self.clone();
        for _ in 0..MAX_ITERATIONS {
            let (q, r) = a.gram_schmidt_qr();
            a = r.matmul(&q)?;

            let mut off_diagonal_sum = 0.0;
            for i in 0..rows {
                for j in 0..cols {
                    if i != j {
                        off_diagonal_sum += a.at(i, j).abs();
                    }
                }
            }
            if off_diagonal_sum < CONVERGENCE_TOLERANCE {
                break;
            }
        }

        Ok((0..rows).map(|i| a.at(i, i)).collect())
    }

    /// Classical Gram-Schmidt QR decomposition of an `m x n` matrix.
    ///
    /// `Q` is `m x n` with orthonormal columns (zero columns where the
    /// residual norm fell below the tolerance), `R` is `n x n` upper
    /// triangular with the column norms on its diagonal.
    pub(crate) fn gram_schmidt_qr(&self) -> (Self, Self) {
        let (m, n) = self.shape();
        let mut q = Matrix::zeros(m, n);
        let mut r = Matrix::zeros(n, n);

        for j in 0..n {
            let mut v: Vec<f64> = (0..m).map(|i| self.at(i, j)).collect();

            // Orthogonalize against the previously settled columns.
            for k in 0..j {
                let q_col = q.column(k);
                let proj = q_col.dot(&Vector::from_slice(&v));
                r.put(k, j, proj);
                for (i, cell) in v.iter_mut().enumerate() {
                    *cell -= proj * q_col[i];
                }
            }

            let norm = Vector::from_slice(&v).norm();
            r.put(j, j, norm);

            // A near-zero residual marks a dependent column; its Q column
            // stays zero rather than being normalized into noise.
            if norm > CONVERGENCE_TOLERANCE {
                for (i, cell) in v.iter().enumerate() {
                    q.put(i, j, cell / norm);
                }
            }
        }

        (q, r)
    }
}

#[cfg(test)]
#[path = "eigen_tests.rs"]
mod tests;
