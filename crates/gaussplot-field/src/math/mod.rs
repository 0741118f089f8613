//! Small ndarray-like types used throughout the crate.
//!
//! Provides `Array1` (1D) and `Array2` (2D) lightweight containers holding
//! coordinate samples and scalar field values, with the handful of
//! elementwise and reduction operations the evaluators need.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
