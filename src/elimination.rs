//! Row-elimination algorithms: Gauss-Jordan inverse and forward-elimination
//! rank.
//!
//! Both routines work on a flat row-major scratch buffer and share the same
//! pivoting discipline: the inverse selects the largest-magnitude pivot in
//! the column (partial pivoting), while rank takes the first entry above the
//! `PIVOT_TOLERANCE` threshold, matching row echelon elimination.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Magnitude below which a pivot candidate or determinant counts as zero.
pub(crate) const PIVOT_TOLERANCE: f64 = 1e-10;

impl Matrix<f64> {
    /// Computes the inverse by Gauss-Jordan elimination with partial
    /// pivoting on the augmented matrix `[A | I]`.
    ///
    /// Singularity is decided once, up front, on the determinant; pivot
    /// magnitudes are not re-checked during elimination.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input and
    /// [`MatrizError::SingularMatrix`] when the determinant's absolute
    /// value falls below `1e-10`.
    pub fn inverse(&self) -> Result<Self> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrizError::NotSquare { rows, cols });
        }

        let det = self.determinant()?;
        if det.abs() < PIVOT_TOLERANCE {
            return Err(MatrizError::SingularMatrix { det });
        }

        let n = rows;
        let width = 2 * n;

        // Augmented [A | I], flat row-major.
        let mut aug = vec![0.0; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = self.as_slice()[i * n + j];
            }
            aug[i * width + n + i] = 1.0;
        }

        for i in 0..n {
            // Partial pivoting: bring the largest-magnitude entry of column i
            // into the pivot position.
            let mut max_row = i;
            for k in (i + 1)..n {
                if aug[k * width + i].abs() > aug[max_row * width + i].abs() {
                    max_row = k;
                }
            }
            if max_row != i {
                swap_rows(&mut aug, width, i, max_row);
            }

            // Normalize the pivot row so the pivot becomes exactly 1.
            let pivot = aug[i * width + i];
            for j in 0..width {
                aug[i * width + j] /= pivot;
            }

            // Zero column i in every other row.
            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = aug[k * width + i];
                for j in 0..width {
                    aug[k * width + j] -= factor * aug[i * width + j];
                }
            }
        }

        // The right half now holds the inverse.
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                result.put(i, j, aug[i * width + n + j]);
            }
        }
        Ok(result)
    }

    /// Computes the rank by forward elimination on a working copy.
    ///
    /// No back-substitution and no row normalization; the returned value is
    /// the number of pivots found before the columns ran out or every row
    /// became a pivot row. Defined for any shape.
    #[must_use]
    pub fn rank(&self) -> usize {
        let (m, n) = self.shape();
        let mut work = self.as_slice().to_vec();
        let mut rank = 0;

        for col in 0..n {
            if rank >= m {
                break;
            }

            // First row at or below the pivot position with a usable entry.
            let pivot_row = (rank..m).find(|&row| work[row * n + col].abs() > PIVOT_TOLERANCE);
            let Some(pivot_row) = pivot_row else {
                continue;
            };

            if pivot_row != rank {
                swap_rows(&mut work, n, rank, pivot_row);
            }

            for row in (rank + 1)..m {
                let factor = work[row * n + col] / work[rank * n + col];
                for j in col..n {
                    work[row * n + j] -= factor * work[rank * n + j];
                }
            }

            rank += 1;
        }

        rank
    }
}

fn swap_rows(buf: &mut [f64], width: usize, a: usize, b: usize) {
    for j in 0..width {
        buf.swap(a * width + j, b * width + j);
    }
}

#[cfg(test)]
#[path = "elimination_tests.rs"]
mod tests;
