#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `linmat-core` provides two generic dense containers, [`Matrix`] and [`Vector`], that work
//! with any arithmetic element type. Every coordinate is bounds-checked, every binary operation
//! checks the sizes of its operands, and failures are reported as typed errors instead of
//! panics.
//!
//! # Coordinates
//!
//! Matrix positions and sizes share one type, [`MatrixIndices`]. The `x` axis is the column
//! and the `y` axis is the row; the `n` and `m` aliases follow the usual `m x n` notation, so
//! `m == y` and `n == x`.
//!
//! ```rust
//! use linmat_core::{MatrixIndices, Mn, Xy};
//!
//! let size = MatrixIndices::from(Mn { m: 2, n: 3 });
//! assert_eq!(size.xy(), Xy { x: 3, y: 2 });
//! assert_eq!(size.to_string(), "(3, 2)");
//! assert_eq!(size.flipped(), MatrixIndices::new(2, 3));
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use linmat_core::{Matrix, MatrixError, Vector};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
//!
//! let product = (&a * &b)?;
//! assert_eq!(product.as_rows(), &[vec![19, 22], vec![43, 50]]);
//!
//! let v = (&a * &Vector::from(vec![1, 1]))?;
//! assert_eq!(v.as_slice(), &[3, 7]);
//!
//! let c = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]])?;
//! assert_eq!(c.determinant()?, 5.0);
//! assert!(a.at((2, 0)).is_err());
//! # Ok::<(), MatrixError>(())
//! ```

/// Error types for matrix and vector operations.
pub mod error;

/// The arithmetic bound shared by all element types.
pub mod element;

/// Coordinates and sizes of matrix entries.
pub mod index;

/// The dense matrix container.
pub mod matrix;

/// The dense vector container.
pub mod vector;

/// Row-echelon reduction and determinants.
pub mod echelon;

/// Arithmetic operators for matrices and vectors.
pub mod ops;

#[cfg(feature = "serde")]
mod serde;

pub use crate::echelon::RowEchelonForm;
pub use crate::element::Element;
pub use crate::error::{MatrixError, VectorError};
pub use crate::index::{MatrixEntry, MatrixIndices, MatrixSize, Mn, Xy};
pub use crate::matrix::{Matrix, Replicate};
pub use crate::vector::Vector;
