//! Smoothing splines: a fitted curve plus the data and settings it came from.

use std::sync::Arc;

use crate::domain::Extrapolation;
use crate::error::SplineError;
use crate::fit::{FitKind, FitOptions, fit_smoothing_spline};
use crate::models::SplineCurve;

/// Fitting input kept around for refits.
#[derive(Debug, PartialEq)]
struct FitData {
    x: Vec<f64>,
    y: Vec<f64>,
    weights: Vec<f64>,
    bounds: (f64, f64),
    degree: usize,
}

/// A smoothing spline fitted to `(x, y)` with smoothing factor `s`.
///
/// Immutable once built. Refitting with another factor returns a new value
/// that shares the input data.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingSpline {
    curve: SplineCurve,
    smoothing: f64,
    residual: f64,
    kind: FitKind,
    data: Arc<FitData>,
}

impl SmoothingSpline {
    /// Cubic smoothing spline with unit weights and default extrapolation.
    pub fn fit(x: &[f64], y: &[f64], s: f64) -> Result<Self, SplineError> {
        Self::fit_with(x, y, s, &FitOptions::default(), Extrapolation::default())
    }

    pub fn fit_with(
        x: &[f64],
        y: &[f64],
        s: f64,
        opts: &FitOptions,
        extrapolation: Extrapolation,
    ) -> Result<Self, SplineError> {
        let fit = fit_smoothing_spline(x, y, s, opts)?;
        let data = FitData {
            x: x.to_vec(),
            y: y.to_vec(),
            weights: fit.weights,
            bounds: fit.bounds,
            degree: opts.degree,
        };
        Ok(Self {
            curve: SplineCurve::new(fit.spline, fit.bounds, extrapolation),
            smoothing: s,
            residual: fit.residual,
            kind: fit.kind,
            data: Arc::new(data),
        })
    }

    /// Refit the same data with a new smoothing factor, starting from the
    /// current knots.
    pub fn with_smoothing_factor(&self, s: f64) -> Result<Self, SplineError> {
        let knots = self.curve.knots();
        let interior = knots[1..knots.len() - 1].to_vec();
        let opts = FitOptions {
            degree: self.data.degree,
            weights: Some(self.data.weights.clone()),
            bounds: Some(self.data.bounds),
            initial_knots: Some(interior),
        };
        let fit = fit_smoothing_spline(&self.data.x, &self.data.y, s, &opts)?;
        Ok(Self {
            curve: SplineCurve::new(fit.spline, fit.bounds, self.curve.extrapolation()),
            smoothing: s,
            residual: fit.residual,
            kind: fit.kind,
            data: Arc::clone(&self.data),
        })
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.curve = self.curve.with_extrapolation(extrapolation);
        self
    }

    pub fn curve(&self) -> &SplineCurve {
        &self.curve
    }

    pub fn eval(&self, x: f64) -> Result<f64, SplineError> {
        self.curve.eval(x)
    }

    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        self.curve.eval_many(xs)
    }

    pub fn derivative(&self, order: usize) -> Result<SplineCurve, SplineError> {
        self.curve.derivative(order)
    }

    pub fn antiderivative(&self, order: usize) -> Result<SplineCurve, SplineError> {
        self.curve.antiderivative(order)
    }

    pub fn derivatives_at(&self, x: f64) -> Result<Vec<f64>, SplineError> {
        self.curve.derivatives_at(x)
    }

    pub fn integral(&self, a: f64, b: f64) -> f64 {
        self.curve.integral(a, b)
    }

    pub fn knots(&self) -> &[f64] {
        self.curve.knots()
    }

    pub fn coefficients(&self) -> &[f64] {
        self.curve.coefficients()
    }

    pub fn degree(&self) -> usize {
        self.curve.degree()
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.curve.bounds()
    }

    /// Weighted sum of squared residuals of the fit.
    pub fn residual(&self) -> f64 {
        self.residual
    }

    pub fn smoothing_factor(&self) -> f64 {
        self.smoothing
    }

    pub fn kind(&self) -> FitKind {
        self.kind
    }

    /// Number of points the spline was fitted to.
    pub fn sample_count(&self) -> usize {
        self.data.x.len()
    }

    /// Largest `|y_i - s(x_i)|` over the fitted points.
    pub fn max_abs_residual(&self) -> f64 {
        self.data
            .x
            .iter()
            .zip(&self.data.y)
            .map(|(&x, &y)| (y - self.curve.bspline().evaluate(x)).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noisy_sine() -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
        // Deterministic "noise" keeps the test reproducible.
        let y = x
            .iter()
            .enumerate()
            .map(|(i, v)| v.sin() + if i % 2 == 0 { 0.02 } else { -0.02 })
            .collect();
        (x, y)
    }

    #[test]
    fn fit_reports_residual_and_factor() {
        let (x, y) = noisy_sine();
        let spline = SmoothingSpline::fit(&x, &y, 0.1).unwrap();
        assert_eq!(spline.smoothing_factor(), 0.1);
        assert!((spline.residual() - 0.1).abs() < 1e-3 * 0.1);
        assert_eq!(spline.sample_count(), 40);
        assert_eq!(spline.degree(), 3);
        assert_eq!(spline.bounds(), (0.0, 9.75));
    }

    #[test]
    fn refit_shares_data_and_tracks_new_factor() {
        let (x, y) = noisy_sine();
        let loose = SmoothingSpline::fit(&x, &y, 0.5).unwrap();
        let tight = loose.with_smoothing_factor(0.02).unwrap();
        assert!(Arc::ptr_eq(&loose.data, &tight.data));
        assert_eq!(tight.smoothing_factor(), 0.02);
        assert!((tight.residual() - 0.02).abs() < 1e-3 * 0.02);
        assert!(tight.max_abs_residual() < loose.max_abs_residual());
    }

    #[test]
    fn refit_keeps_extrapolation_mode() {
        let (x, y) = noisy_sine();
        let spline = SmoothingSpline::fit(&x, &y, 0.1)
            .unwrap()
            .with_extrapolation(Extrapolation::Zeros);
        let refit = spline.with_smoothing_factor(0.2).unwrap();
        assert_eq!(refit.eval(20.0).unwrap(), 0.0);
    }

    #[test]
    fn integral_of_sine_over_a_period() {
        let x: Vec<f64> = (0..=60).map(|i| i as f64 * std::f64::consts::TAU / 60.0).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let spline = SmoothingSpline::fit(&x, &y, 1e-6).unwrap();
        assert!(spline.integral(0.0, std::f64::consts::TAU).abs() < 1e-3);
        assert!((spline.integral(0.0, std::f64::consts::PI) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn fit_errors_propagate() {
        let err = SmoothingSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.1).unwrap_err();
        assert!(matches!(err, SplineError::InsufficientData { actual: 3, .. }));
    }
}
