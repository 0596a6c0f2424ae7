//! Vector and matrix types used throughout the crate.
//!
//! Provides `Vector` (1D) and `Matrix` (2D) containers backed by a single
//! contiguous buffer. Both are immutable once constructed; every operation
//! returns a new value.
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, ShapeError};
pub use vector::Vector;

use num_traits::Num;

/// Element bound shared by `Vector` and `Matrix` arithmetic.
///
/// Covers the built-in integer and floating-point types.
pub trait Scalar: Num + Copy {}

impl<T: Num + Copy> Scalar for T {}
