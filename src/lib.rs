//! __matlite__ is a dense linear algebra library for real matrices and
//! vectors, generic over [`f32`] and [`f64`] scalars.
//!
//! Matrices are stored row-major in a single contiguous buffer and
//! support slicing by rows, columns and rectangular sub-blocks using
//! optionally open-ended inclusive [`Interval`] ranges.  On top of the
//! storage layer sit the usual arithmetic operations (transpose, sums,
//! products, elementwise maps along either axis) and dense
//! factorizations: matrix inversion through pivoted LU, singular value
//! decomposition, and the Moore-Penrose pseudo-inverse.
//!
//! All shape and bounds preconditions on the public surface are
//! reported as typed [`MatrixError`] values.  Indexing through the
//! `[]` operator is the one opt-in exception and panics on violation,
//! matching the container types in std.
//!
//! # Example
//! ```
//! use matlite::{matmul, inverse, Matrix};
//!
//! let a: Matrix<f64> = Matrix::from(&[[4.0, 7.0], [2.0, 6.0]]);
//! let ainv = inverse(&a).unwrap();
//! let eye = matmul(&a, &ainv).unwrap();
//! assert!((eye[(0, 0)] - 1.0).abs() < 1e-12);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

mod errors;
pub use errors::MatrixError;

mod floats;
pub use floats::{AsFloatT, FloatT};

mod interval;
pub use interval::Interval;

mod math_traits;
pub use math_traits::{MatrixMath, MultiplyGEMM, VectorMath};

mod vecmath;

pub mod vector;

mod matrix;
pub use matrix::*;

mod factor;
pub use factor::*;

mod utils;

#[cfg(test)]
mod tests;
