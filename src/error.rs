//! Error types.
//!
//! Library code returns typed errors (`SplineError`, `ReferenceError`); the
//! binary folds them into `AppError`, which carries the process exit code.

use thiserror::Error;

use crate::domain::{Species, Variant};

/// Errors raised while fitting or evaluating a smoothing spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Fewer distinct abscissae than a spline of this degree needs.
    #[error("insufficient data: degree {degree} needs at least {required} distinct x values, got {actual}")]
    InsufficientData {
        degree: usize,
        required: usize,
        actual: usize,
    },

    /// The fit itself failed or its preconditions were violated.
    #[error("spline fit failed: {0}")]
    Fitting(#[from] FittingFailure),

    /// Query outside the bounding box with `Extrapolation::Raise`.
    #[error("x = {x} is outside the spline domain [{lo}, {hi}]")]
    OutOfRange { x: f64, lo: f64, hi: f64 },

    /// Derivative order above the spline degree.
    #[error("derivative of order {order} is not defined for a degree {degree} spline")]
    DerivativeOrder { order: usize, degree: usize },
}

/// Reasons a fit can fail once there is enough data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FittingFailure {
    #[error("x and y have different lengths ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("weights have length {actual}, expected {expected}")]
    WeightLength { expected: usize, actual: usize },

    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("x must be non-decreasing (first decrease at index {index})")]
    Unsorted { index: usize },

    #[error("weight at index {index} must be positive and finite")]
    InvalidWeight { index: usize },

    #[error("degree must be between 1 and 5, got {degree}")]
    InvalidDegree { degree: usize },

    #[error("smoothing factor must be finite and non-negative, got {s}")]
    InvalidSmoothing { s: f64 },

    #[error("bounding box [{xb}, {xe}] does not enclose the data")]
    InvalidBounds { xb: f64, xe: f64 },

    #[error("interpolation (s = 0) is impossible with duplicate x = {x}")]
    DuplicateAbscissa { x: f64 },

    #[error("linear system is singular")]
    Singular,

    #[error("smoothing factor search did not converge after {iterations} evaluations (fp = {fp:e}, s = {s:e})")]
    NotConverged { iterations: usize, fp: f64, s: f64 },

    #[error("smoothing factor s = {s:e} is below the smallest reachable residual fp = {fp:e}")]
    SmoothingUnreachable { fp: f64, s: f64 },
}

/// A reference spline that could not be built, with enough context to reproduce.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to build {variant} {species}-cyanide reference spline (s = {smoothing:e}): {source}")]
pub struct ReferenceError {
    pub species: Species,
    pub variant: Variant,
    pub smoothing: f64,
    #[source]
    pub source: SplineError,
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ReferenceError> for AppError {
    fn from(err: ReferenceError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl From<SplineError> for AppError {
    fn from(err: SplineError) -> Self {
        AppError::new(4, err.to_string())
    }
}
