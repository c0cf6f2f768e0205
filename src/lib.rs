//! Matriz: a matrix computation engine in pure Rust.
//!
//! Matriz provides a value-semantic [`Matrix`] type with elementwise
//! arithmetic, Gauss-Jordan inversion, forward-elimination rank, cofactor
//! determinants, and unshifted-QR eigenvalue approximation. The engine is
//! purely computational: no I/O, no global state, every operation runs to
//! completion synchronously and reports failures through [`Result`].
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![
//!     4.0, 7.0,
//!     2.0, 6.0,
//! ]).unwrap();
//!
//! assert!((a.determinant().unwrap() - 10.0).abs() < 1e-9);
//!
//! let inv = a.inverse().unwrap();
//! assert!((inv.get(0, 0).unwrap() - 0.6).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix and Vector value types
//! - [`determinant`]: Recursive Laplace (cofactor) expansion
//! - [`elimination`]: Gauss-Jordan inverse and forward-elimination rank
//! - [`eigen`]: Unshifted QR eigenvalue approximation over Gram-Schmidt QR
//! - [`storage`]: Injected persistence boundary for named matrices
//!
//! # Numerical limits
//!
//! The determinant is the specified exponential-time cofactor expansion,
//! the QR kernel is classical (non-reorthogonalized) Gram-Schmidt, and the
//! eigenvalue loop runs unshifted with a fixed 100-iteration cap. These are
//! contractual behaviors, kept rather than optimized; callers who need
//! bounded latency gate their input sizes before invoking the engine.

pub mod determinant;
pub mod eigen;
pub mod elimination;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod storage;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, MatrixRecord, Vector};
pub use storage::{MatrixStore, MemoryStore};
