//! Core compute primitives (Vector, Matrix).
//!
//! These types provide the foundation for every engine operation.

mod matrix;
mod vector;

pub use matrix::{Matrix, MatrixRecord};
pub use vector::Vector;
