//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of floating-point values (row-major storage).
///
/// Every operation other than the in-place [`Matrix::set`] returns a newly
/// owned matrix; no operation aliases another matrix's buffer, and `Clone`
/// performs a full deep copy.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Plain structural representation of a matrix, the serialization contract
/// shared with persistence collaborators.
///
/// `data` holds one inner vector per row, each of `cols` cells, so persisted
/// records stay readable regardless of the engine's internal layout.
/// Round-trips losslessly through [`Matrix::to_record`] and
/// [`Matrix::from_record`] for finite numeric data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRecord {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Cell values, one inner vector per row.
    pub data: Vec<Vec<f64>>,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if either dimension is
    /// zero or the data length doesn't equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::dimension_mismatch(
                "at least 1x1",
                format!("{rows}x{cols}"),
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{rows}x{cols} = {} cells", rows * cols),
                format!("{} cells", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col). The only in-place mutation the type
    /// offers.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Unchecked flat-buffer read for internal kernels.
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Unchecked flat-buffer write for internal kernels.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates a matrix from nested rows of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the input is empty or
    /// any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrizError::dimension_mismatch(
                "at least 1x1",
                format!("{n_rows}x{n_cols}"),
            ));
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(MatrizError::dimension_mismatch(
                    format!("{n_cols} cells per row"),
                    format!("{} cells", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication by the standard triple-loop inner
    /// product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `self.cols`
    /// equals `other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                format!("{} rows in right operand", self.cols),
                format!("{} rows", other.rows),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.at(i, k) * other.at(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Applies a pure mapping `(value, row, col) -> value` to every cell,
    /// producing a new matrix of the same shape.
    ///
    /// The mapping sees one cell at a time and must not rely on side
    /// effects; the engine treats it as a black box.
    #[must_use]
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize, usize) -> f64,
    {
        let data: Vec<f64> = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, &x)| f(x, idx / self.cols, idx % self.cols))
            .collect();
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Converts to the plain structural representation used for storage.
    #[must_use]
    pub fn to_record(&self) -> MatrixRecord {
        MatrixRecord {
            rows: self.rows,
            cols: self.cols,
            data: self.data.chunks(self.cols).map(<[f64]>::to_vec).collect(),
        }
    }

    /// Reconstructs a matrix from a structural record.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the record's stated
    /// shape doesn't match its data.
    pub fn from_record(record: &MatrixRecord) -> Result<Self> {
        if record.data.len() != record.rows {
            return Err(MatrizError::dimension_mismatch(
                format!("{} rows", record.rows),
                format!("{} rows", record.data.len()),
            ));
        }
        for row in &record.data {
            if row.len() != record.cols {
                return Err(MatrizError::dimension_mismatch(
                    format!("{} cells per row", record.cols),
                    format!("{} cells", row.len()),
                ));
            }
        }
        Self::from_rows(record.data.clone())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Matrix<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[ ")?;
            for j in 0..self.cols {
                write!(f, "{:.3} ", self.at(i, j))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
