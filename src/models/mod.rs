//! Fitted spline types.
//!
//! - `SplineCurve`: evaluation, derivatives and integrals with an extrapolation policy
//! - `SmoothingSpline`: a curve plus the data and smoothing factor it was fitted with

pub mod curve;
pub mod spline;

pub use curve::*;
pub use spline::*;
