//! Smoothing spline fitting.
//!
//! Responsibilities:
//!
//! - place knots (interpolation layout, adaptive refinement)
//! - build the derivative-jump penalty
//! - choose the smoothing parameter so the residual matches `s`

pub mod fitter;
pub mod knots;
pub mod penalty;

pub use fitter::*;
