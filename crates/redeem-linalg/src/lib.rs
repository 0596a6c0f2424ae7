//! redeem-linalg: dimension-checked vector arithmetic.
//!
//! This crate provides an immutable `Vector` type with dot/inner, cross and
//! outer products, scalar scaling, element-wise addition and summation, plus
//! the dense `Matrix` container returned by the outer product.
//!
//! Operations with a dimensional precondition return a [`Result`] carrying
//! [`LinalgError::DimensionMismatch`] instead of panicking. Floating-point
//! results can be compared with `approx_eq` under a [`ToleranceConfig`].
//!
//! ```
//! use redeem_linalg::Vector;
//!
//! let a = Vector::from_vec(vec![1, 2, 3]);
//! let b = Vector::from_vec(vec![4, -5, 6]);
//! assert_eq!(a.dot_product(&b).unwrap(), 12);
//! assert_eq!(a.cross_product(&b).unwrap().to_vec(), vec![27, 6, -13]);
//! ```
pub mod config;
pub mod error;
pub mod math;

pub use config::{ToleranceConfig, ToleranceMode};
pub use error::{LinalgError, Result};
pub use math::{Matrix, Scalar, ShapeError, Vector};
