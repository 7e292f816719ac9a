//! Mathematical utilities: B-spline kernels and least squares solvers.

pub mod bspline;
pub mod ols;

pub use bspline::*;
pub use ols::*;
