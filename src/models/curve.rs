//! Spline evaluation with a bounding box and extrapolation policy.

use crate::domain::Extrapolation;
use crate::error::SplineError;
use crate::math::{BSpline, MAX_ORDER};

/// A fitted spline ready for evaluation.
///
/// Derived curves (derivatives, antiderivatives) keep the bounding box and
/// extrapolation mode of the curve they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve {
    spline: BSpline,
    bounds: (f64, f64),
    extrapolation: Extrapolation,
}

impl SplineCurve {
    pub fn new(spline: BSpline, bounds: (f64, f64), extrapolation: Extrapolation) -> Self {
        Self {
            spline,
            bounds,
            extrapolation,
        }
    }

    /// Evaluate at `x`.
    ///
    /// Outside `bounds()` the result follows the extrapolation mode. A NaN `x`
    /// evaluates to NaN.
    pub fn eval(&self, x: f64) -> Result<f64, SplineError> {
        let (lo, hi) = self.bounds;
        if x >= lo && x <= hi {
            return Ok(self.spline.evaluate(x));
        }
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        match self.extrapolation {
            Extrapolation::Extrapolate => Ok(self.spline.evaluate(x)),
            Extrapolation::Zeros => Ok(0.0),
            Extrapolation::Raise => Err(SplineError::OutOfRange { x, lo, hi }),
            Extrapolation::Const => Ok(self.spline.evaluate(x.clamp(lo, hi))),
        }
    }

    /// Evaluate at every point; fails on the first out-of-range point under
    /// `Extrapolation::Raise`.
    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// The `order`-th derivative.
    pub fn derivative(&self, order: usize) -> Result<SplineCurve, SplineError> {
        let degree = self.spline.degree();
        let spline = self
            .spline
            .derivative(order)
            .ok_or(SplineError::DerivativeOrder { order, degree })?;
        Ok(self.derived(spline))
    }

    /// The `order`-th antiderivative, zero at the left end of the base interval.
    pub fn antiderivative(&self, order: usize) -> Result<SplineCurve, SplineError> {
        let degree = self.spline.degree();
        if degree + order >= MAX_ORDER {
            return Err(SplineError::DerivativeOrder { order, degree });
        }
        Ok(self.derived(self.spline.antiderivative(order)))
    }

    fn derived(&self, spline: BSpline) -> SplineCurve {
        SplineCurve {
            spline,
            bounds: self.bounds,
            extrapolation: self.extrapolation,
        }
    }

    /// Values of all derivatives `0..=k` at `x`.
    ///
    /// Only defined inside the bounding box, whatever the extrapolation mode.
    pub fn derivatives_at(&self, x: f64) -> Result<Vec<f64>, SplineError> {
        let (lo, hi) = self.bounds;
        if !(x >= lo && x <= hi) {
            return Err(SplineError::OutOfRange { x, lo, hi });
        }
        let k = self.spline.degree();
        let mut out = Vec::with_capacity(k + 1);
        let mut current = self.spline.clone();
        out.push(current.evaluate(x));
        for order in 1..=k {
            current = current
                .derivative(1)
                .ok_or(SplineError::DerivativeOrder { order, degree: k })?;
            out.push(current.evaluate(x));
        }
        Ok(out)
    }

    /// Definite integral from `a` to `b`.
    ///
    /// The spline is taken to be zero outside its bounding box, so the limits
    /// are clamped to it. `a > b` gives the negated integral.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let (lo, hi) = self.bounds;
        let anti = self.spline.antiderivative(1);
        anti.evaluate(b.clamp(lo, hi)) - anti.evaluate(a.clamp(lo, hi))
    }

    /// Distinct knots, ends included.
    pub fn knots(&self) -> &[f64] {
        self.spline.distinct_knots()
    }

    /// B-spline coefficients.
    pub fn coefficients(&self) -> &[f64] {
        self.spline.coeffs()
    }

    pub fn degree(&self) -> usize {
        self.spline.degree()
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Underlying B-spline representation.
    pub fn bspline(&self) -> &BSpline {
        &self.spline
    }
}
