//! Univariate smoothing spline fitting.
//!
//! Given:
//! - abscissae `x_i` (non-decreasing)
//! - observed values `y_i`
//! - positive weights `w_i`
//! - a smoothing factor `s >= 0`
//!
//! we look for the smoothest spline of degree `k` whose weighted residual
//!
//! ```text
//! fp = Σ (w_i (y_i - s(x_i)))²
//! ```
//!
//! equals `s` (within 0.1 %). "Smoothest" means the k-th derivative jumps as
//! little as possible at the interior knots.
//!
//! The procedure follows the classic FITPACK `curfit` scheme:
//!
//! 1. least squares polynomial; accept if `fp0 <= s`
//! 2. least squares splines with a growing knot set until `fp < s`
//! 3. on that knot set, penalized least squares `(BᵀB + λ DᵀD) c = Bᵀy`,
//!    with λ chosen so that `fp(λ) = s`
//!
//! `fp(λ)` increases monotonically from the least squares residual (`λ = 0`)
//! to the polynomial residual (`λ → ∞`), so step 3 is a bracketed scalar
//! root search in `ln λ`.

use nalgebra::{DMatrix, DVector};

use crate::error::{FittingFailure, SplineError};
use crate::fit::knots::{add_knots, interpolation_knots};
use crate::fit::penalty::discontinuity_matrix;
use crate::math::{BSpline, basis_values, clamped_knots, find_span, solve_least_squares, solve_normal_equations};

/// Relative tolerance on `|fp - s|`.
const TOLERANCE: f64 = 1e-3;

/// Budget of `fp(λ)` evaluations in the smoothing search.
const MAX_EVALUATIONS: usize = 60;

/// Decades explored in each direction when bracketing `λ`.
const MAX_BRACKET_DECADES: usize = 40;

/// Highest supported spline degree.
pub const MAX_DEGREE: usize = 5;

/// Fitting options beyond the data and the smoothing factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Spline degree, `1..=5`.
    pub degree: usize,
    /// Per-point weights; `None` means all ones.
    pub weights: Option<Vec<f64>>,
    /// Bounding box `[xb, xe]`; `None` means `[x_0, x_{m-1}]`.
    pub bounds: Option<(f64, f64)>,
    /// Interior knots to start the refinement from (continuation).
    pub initial_knots: Option<Vec<f64>>,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            degree: 3,
            weights: None,
            bounds: None,
            initial_knots: None,
        }
    }
}

/// How the returned spline was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitKind {
    /// `s == 0`: passes through every point.
    Interpolating,
    /// A single polynomial already satisfies `fp <= s`.
    Polynomial,
    /// A least squares spline on the refined knots landed within tolerance.
    LeastSquares,
    /// Penalized least squares with the given `λ`.
    Penalized { lambda: f64 },
}

/// Result of `fit_smoothing_spline`.
#[derive(Debug, Clone)]
pub struct SplineFit {
    pub spline: BSpline,
    /// Weighted sum of squared residuals.
    pub residual: f64,
    pub kind: FitKind,
    /// Weights actually used (all ones when none were given).
    pub weights: Vec<f64>,
    pub bounds: (f64, f64),
}

/// The validated fitting problem.
struct Problem<'a> {
    x: &'a [f64],
    y: &'a [f64],
    w: Vec<f64>,
    degree: usize,
    bounds: (f64, f64),
}

/// Least squares solution on a fixed knot set.
struct Solution {
    knots: Vec<f64>,
    coeffs: Vec<f64>,
    fp: f64,
    residual_sq: Vec<f64>,
}

/// Weighted design matrix and right-hand side for one knot vector.
struct Design {
    b: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl Design {
    fn new(problem: &Problem<'_>, knots: &[f64]) -> Self {
        let k = problem.degree;
        let m = problem.x.len();
        let ncoef = knots.len() - k - 1;
        let mut b = DMatrix::zeros(m, ncoef);
        let mut rhs = DVector::zeros(m);
        let mut values = [0.0; MAX_DEGREE + 1];

        for i in 0..m {
            let xi = problem.x[i];
            let wi = problem.w[i];
            let span = find_span(knots, k, xi);
            basis_values(knots, k, span, xi, &mut values);
            for (j, v) in values[..=k].iter().enumerate() {
                b[(i, span - k + j)] = wi * v;
            }
            rhs[i] = wi * problem.y[i];
        }
        Self { b, rhs }
    }

    /// Residual vector `W (y - B c)`.
    fn residuals(&self, coeffs: &DVector<f64>) -> DVector<f64> {
        &self.rhs - &self.b * coeffs
    }
}

/// Fit a smoothing spline with smoothing factor `s`.
///
/// See the module docs for the procedure. Errors:
/// - `SplineError::InsufficientData` with fewer than `degree + 1` distinct x
/// - `SplineError::Fitting` for invalid input or a fit that cannot reach `s`
pub fn fit_smoothing_spline(x: &[f64], y: &[f64], s: f64, opts: &FitOptions) -> Result<SplineFit, SplineError> {
    let problem = validate(x, y, s, opts)?;

    let fit = if s == 0.0 {
        interpolate(&problem)?
    } else {
        smooth(&problem, s, opts.initial_knots.as_deref())?
    };

    log::debug!(
        "spline fit: m={} k={} s={s:e} knots={} fp={:e} ({:?})",
        problem.x.len(),
        problem.degree,
        fit.0.knots.len(),
        fit.0.fp,
        fit.1
    );

    let Problem { w, degree, bounds, .. } = problem;
    let (solution, kind) = fit;
    Ok(SplineFit {
        spline: BSpline::new(solution.knots, solution.coeffs, degree),
        residual: solution.fp,
        kind,
        weights: w,
        bounds,
    })
}

fn validate<'a>(x: &'a [f64], y: &'a [f64], s: f64, opts: &FitOptions) -> Result<Problem<'a>, SplineError> {
    let k = opts.degree;
    if k == 0 || k > MAX_DEGREE {
        return Err(FittingFailure::InvalidDegree { degree: k }.into());
    }
    if x.len() != y.len() {
        return Err(FittingFailure::LengthMismatch { x: x.len(), y: y.len() }.into());
    }
    let m = x.len();

    let w = match &opts.weights {
        Some(w) => {
            if w.len() != m {
                return Err(FittingFailure::WeightLength {
                    expected: m,
                    actual: w.len(),
                }
                .into());
            }
            if let Some(index) = w.iter().position(|&v| !(v.is_finite() && v > 0.0)) {
                return Err(FittingFailure::InvalidWeight { index }.into());
            }
            w.clone()
        }
        None => vec![1.0; m],
    };

    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(FittingFailure::NonFinite { index }.into());
    }
    if !(s.is_finite() && s >= 0.0) {
        return Err(FittingFailure::InvalidSmoothing { s }.into());
    }
    if let Some(pos) = x.windows(2).position(|w| w[1] < w[0]) {
        return Err(FittingFailure::Unsorted { index: pos + 1 }.into());
    }

    let distinct = 1 + x.windows(2).filter(|w| w[1] > w[0]).count();
    let distinct = if m == 0 { 0 } else { distinct };
    if distinct < k + 1 {
        return Err(SplineError::InsufficientData {
            degree: k,
            required: k + 1,
            actual: distinct,
        });
    }

    let (xb, xe) = opts.bounds.unwrap_or((x[0], x[m - 1]));
    if !(xb.is_finite() && xe.is_finite() && xb <= x[0] && xe >= x[m - 1] && xb < xe) {
        return Err(FittingFailure::InvalidBounds { xb, xe }.into());
    }

    Ok(Problem {
        x,
        y,
        w,
        degree: k,
        bounds: (xb, xe),
    })
}

fn interpolate(problem: &Problem<'_>) -> Result<(Solution, FitKind), SplineError> {
    if let Some(w) = problem.x.windows(2).find(|w| w[0] == w[1]) {
        return Err(FittingFailure::DuplicateAbscissa { x: w[0] }.into());
    }
    let interior = interpolation_knots(problem.x, problem.degree);
    let solution = least_squares(problem, &interior)?;
    Ok((solution, FitKind::Interpolating))
}

fn smooth(problem: &Problem<'_>, s: f64, initial: Option<&[f64]>) -> Result<(Solution, FitKind), SplineError> {
    let k = problem.degree;
    let m = problem.x.len();
    let max_knots = m + k + 1;
    let acc = TOLERANCE * s;

    let poly = least_squares(problem, &[])?;
    if poly.fp <= s {
        return Ok((poly, FitKind::Polynomial));
    }
    let fp_poly = poly.fp;

    let mut interior = sanitize_initial_knots(initial, problem.bounds);
    let mut current = if interior.is_empty() {
        poly
    } else {
        least_squares(problem, &interior)?
    };

    let mut fp_old = 0.0;
    let mut nplus = 0usize;
    let mut below_target = false;

    for round in 0..m {
        let fpms = current.fp - s;
        if fpms.abs() < acc {
            return Ok((current, FitKind::LeastSquares));
        }
        if fpms < 0.0 {
            below_target = true;
            break;
        }
        if current.knots.len() >= max_knots {
            return Err(FittingFailure::SmoothingUnreachable { fp: current.fp, s }.into());
        }

        nplus = if nplus == 0 {
            1
        } else {
            let mut npl1 = nplus * 2;
            if fp_old - current.fp > acc {
                npl1 = (nplus as f64 * fpms / (fp_old - current.fp)) as usize;
            }
            (nplus * 2).min(npl1.max(nplus / 2).max(1))
        };
        fp_old = current.fp;

        let added = add_knots(
            problem.x,
            &current.knots,
            k,
            &current.residual_sq,
            &mut interior,
            nplus,
            max_knots,
        );
        if added == 0 {
            return Err(FittingFailure::SmoothingUnreachable { fp: current.fp, s }.into());
        }

        current = least_squares(problem, &interior)?;
        log::debug!(
            "knot round {round}: +{added} knots -> {} interior, fp={:e}",
            interior.len(),
            current.fp
        );
    }

    if !below_target {
        return Err(FittingFailure::NotConverged {
            iterations: m,
            fp: current.fp,
            s,
        }
        .into());
    }

    penalized(problem, current.knots, s, fp_poly)
}

/// Interior knots from a previous fit: sorted, deduplicated, strictly inside the bounds.
fn sanitize_initial_knots(initial: Option<&[f64]>, bounds: (f64, f64)) -> Vec<f64> {
    let Some(initial) = initial else {
        return Vec::new();
    };
    let (xb, xe) = bounds;
    let mut knots: Vec<f64> = initial
        .iter()
        .copied()
        .filter(|t| t.is_finite() && *t > xb && *t < xe)
        .collect();
    knots.sort_by(f64::total_cmp);
    knots.dedup();
    knots
}

fn least_squares(problem: &Problem<'_>, interior: &[f64]) -> Result<Solution, SplineError> {
    let (xb, xe) = problem.bounds;
    let knots = clamped_knots(xb, xe, interior, problem.degree);
    let design = Design::new(problem, &knots);

    let bt = design.b.transpose();
    let coeffs = solve_normal_equations(&bt * &design.b, &(&bt * &design.rhs))
        .or_else(|| solve_least_squares(&design.b, &design.rhs))
        .ok_or(FittingFailure::Singular)?;

    Ok(finish(&design, knots, coeffs))
}

fn finish(design: &Design, knots: Vec<f64>, coeffs: DVector<f64>) -> Solution {
    let r = design.residuals(&coeffs);
    let residual_sq: Vec<f64> = r.iter().map(|v| v * v).collect();
    let fp = residual_sq.iter().sum();
    Solution {
        knots,
        coeffs: coeffs.iter().copied().collect(),
        fp,
        residual_sq,
    }
}

/// Normal-equation pieces that do not depend on `λ`.
struct PenalizedSystem {
    design: Design,
    penalty: DMatrix<f64>,
    btb: DMatrix<f64>,
    bty: DVector<f64>,
    dtd: DMatrix<f64>,
}

impl PenalizedSystem {
    fn new(problem: &Problem<'_>, knots: &[f64]) -> Self {
        let design = Design::new(problem, knots);
        let penalty = discontinuity_matrix(knots, problem.degree);
        let bt = design.b.transpose();
        let btb = &bt * &design.b;
        let bty = &bt * &design.rhs;
        let dtd = penalty.transpose() * &penalty;
        Self {
            design,
            penalty,
            btb,
            bty,
            dtd,
        }
    }

    fn solve(&self, lambda: f64) -> Result<DVector<f64>, SplineError> {
        let a = &self.btb + &self.dtd * lambda;
        if let Some(c) = solve_normal_equations(a, &self.bty) {
            return Ok(c);
        }

        // Stack [B; sqrt(λ) D] and solve the augmented problem directly.
        let m = self.design.b.nrows();
        let p = self.penalty.nrows();
        let ncoef = self.design.b.ncols();
        let mut stacked = DMatrix::zeros(m + p, ncoef);
        stacked.rows_mut(0, m).copy_from(&self.design.b);
        stacked.rows_mut(m, p).copy_from(&(&self.penalty * lambda.sqrt()));
        let mut rhs = DVector::zeros(m + p);
        rhs.rows_mut(0, m).copy_from(&self.design.rhs);

        solve_least_squares(&stacked, &rhs).ok_or_else(|| FittingFailure::Singular.into())
    }

    fn residual(&self, coeffs: &DVector<f64>) -> f64 {
        self.design.residuals(coeffs).norm_squared()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    None,
    Low,
    High,
}

/// Root search for `fp(λ) - s` in `u = ln λ`.
struct SmoothingSearch<'a> {
    system: &'a PenalizedSystem,
    s: f64,
    acc: f64,
    evaluations: usize,
    last_fp: f64,
}

/// One evaluated point of the search.
struct Probe {
    u: f64,
    f: f64,
    coeffs: DVector<f64>,
}

impl SmoothingSearch<'_> {
    fn probe(&mut self, u: f64) -> Result<Probe, SplineError> {
        let coeffs = self.system.solve(u.exp())?;
        let fp = self.system.residual(&coeffs);
        self.evaluations += 1;
        self.last_fp = fp;
        Ok(Probe { u, f: fp - self.s, coeffs })
    }

    fn converged(&self, probe: &Probe) -> bool {
        probe.f.abs() < self.acc
    }

    fn failure(&self) -> SplineError {
        FittingFailure::NotConverged {
            iterations: self.evaluations,
            fp: self.last_fp,
            s: self.s,
        }
        .into()
    }

    /// Step away from `start` one decade at a time until `f` changes sign.
    ///
    /// Returns the bracket as `(f < 0 end, f > 0 end)`, or the probe itself when
    /// it already lands within tolerance.
    fn bracket(&mut self, start: Probe) -> Result<Result<(Probe, Probe), Probe>, SplineError> {
        let direction = if start.f > 0.0 { -1.0 } else { 1.0 };
        let mut inner = start;
        for _ in 0..MAX_BRACKET_DECADES {
            let outer = self.probe(inner.u + direction * std::f64::consts::LN_10)?;
            if self.converged(&outer) {
                return Ok(Err(outer));
            }
            if outer.f.signum() != inner.f.signum() {
                return Ok(Ok(if outer.f < 0.0 { (outer, inner) } else { (inner, outer) }));
            }
            inner = outer;
        }
        Err(self.failure())
    }

    /// Illinois-modified regula falsi on a sign-changing bracket.
    fn refine(&mut self, mut lo: Probe, mut hi: Probe) -> Result<Probe, SplineError> {
        let (mut f_lo, mut f_hi) = (lo.f, hi.f);
        let mut side = Side::None;
        while self.evaluations < MAX_EVALUATIONS {
            let u = (lo.u * f_hi - hi.u * f_lo) / (f_hi - f_lo);
            let probe = self.probe(u)?;
            if self.converged(&probe) {
                return Ok(probe);
            }
            if probe.f < 0.0 {
                f_lo = probe.f;
                lo = probe;
                if side == Side::Low {
                    f_hi *= 0.5;
                }
                side = Side::Low;
            } else {
                f_hi = probe.f;
                hi = probe;
                if side == Side::High {
                    f_lo *= 0.5;
                }
                side = Side::High;
            }
        }
        Err(self.failure())
    }
}

fn penalized(problem: &Problem<'_>, knots: Vec<f64>, s: f64, fp_poly: f64) -> Result<(Solution, FitKind), SplineError> {
    let system = PenalizedSystem::new(problem, &knots);
    let mut search = SmoothingSearch {
        system: &system,
        s,
        acc: TOLERANCE * s,
        evaluations: 0,
        last_fp: f64::NAN,
    };

    // Start where data and penalty terms carry comparable weight.
    let trace_d = system.dtd.trace();
    let lambda0 = if trace_d > 0.0 {
        system.btb.trace() / trace_d
    } else {
        1.0
    };

    let start = search.probe(lambda0.ln())?;
    let found = if search.converged(&start) {
        start
    } else {
        match search.bracket(start) {
            Ok(Ok((lo, hi))) => search.refine(lo, hi)?,
            Ok(Err(probe)) => probe,
            Err(err) => {
                log::warn!("smoothing search failed to bracket s={s:e} (polynomial fp={fp_poly:e})");
                return Err(err);
            }
        }
    };

    log::debug!(
        "smoothing search converged after {} evaluations, λ={:e}",
        search.evaluations,
        found.u.exp()
    );
    let lambda = found.u.exp();
    let solution = finish(&system.design, knots, found.coeffs);
    Ok((solution, FitKind::Penalized { lambda }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_data(n: usize) -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let y = x.iter().map(|v| v.sin()).collect();
        (x, y)
    }

    fn weighted_residual(fit: &SplineFit, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .zip(&fit.weights)
            .map(|((&xi, &yi), &wi)| (wi * (yi - fit.spline.evaluate(xi))).powi(2))
            .sum()
    }

    #[test]
    fn residual_hits_smoothing_factor() {
        let (x, y) = sine_data(25);
        for &s in &[0.5, 0.05, 0.005] {
            let fit = fit_smoothing_spline(&x, &y, s, &FitOptions::default()).unwrap();
            assert!(
                (fit.residual - s).abs() <= TOLERANCE * s,
                "s={s}: fp={} ({:?})",
                fit.residual,
                fit.kind
            );
            let fp = weighted_residual(&fit, &x, &y);
            assert!((fp - fit.residual).abs() < 1e-10);
        }
    }

    #[test]
    fn smaller_smoothing_factor_uses_more_knots() {
        let (x, y) = sine_data(25);
        let loose = fit_smoothing_spline(&x, &y, 0.5, &FitOptions::default()).unwrap();
        let tight = fit_smoothing_spline(&x, &y, 1e-4, &FitOptions::default()).unwrap();
        assert!(tight.spline.knots().len() >= loose.spline.knots().len());
    }

    #[test]
    fn large_smoothing_factor_returns_polynomial() {
        let (x, y) = sine_data(13);
        let fit = fit_smoothing_spline(&x, &y, 1e3, &FitOptions::default()).unwrap();
        assert_eq!(fit.kind, FitKind::Polynomial);
        assert_eq!(fit.spline.knots().len(), 8);
    }

    #[test]
    fn cubic_data_is_reproduced_exactly() {
        let x: Vec<f64> = (0..9).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v * v - 2.0 * v).collect();
        let fit = fit_smoothing_spline(&x, &y, 1e-6, &FitOptions::default()).unwrap();
        assert_eq!(fit.kind, FitKind::Polynomial);
        let v = fit.spline.evaluate(1.7);
        assert!((v - (1.7f64.powi(3) - 3.4)).abs() < 1e-9);
    }

    #[test]
    fn zero_smoothing_interpolates() {
        let (x, y) = sine_data(10);
        let fit = fit_smoothing_spline(&x, &y, 0.0, &FitOptions::default()).unwrap();
        assert_eq!(fit.kind, FitKind::Interpolating);
        assert_eq!(fit.spline.knots().len(), x.len() + 4);
        for (&xi, &yi) in x.iter().zip(&y) {
            assert!((fit.spline.evaluate(xi) - yi).abs() < 1e-9);
        }
    }

    #[test]
    fn other_degrees_fit() {
        let (x, y) = sine_data(20);
        for degree in [1, 2, 4, 5] {
            let opts = FitOptions {
                degree,
                ..FitOptions::default()
            };
            let fit = fit_smoothing_spline(&x, &y, 0.01, &opts).unwrap();
            assert_eq!(fit.spline.degree(), degree);
            assert!((fit.residual - 0.01).abs() <= TOLERANCE * 0.01 || fit.residual < 0.01);
        }
    }

    #[test]
    fn weights_pull_the_fit_towards_heavy_points() {
        let (x, mut y) = sine_data(21);
        y[10] += 0.5;
        let plain = fit_smoothing_spline(&x, &y, 0.3, &FitOptions::default()).unwrap();
        let mut w = vec![1.0; 21];
        w[10] = 10.0;
        let opts = FitOptions {
            weights: Some(w),
            ..FitOptions::default()
        };
        let weighted = fit_smoothing_spline(&x, &y, 0.3, &opts).unwrap();
        let e_plain = (plain.spline.evaluate(x[10]) - y[10]).abs();
        let e_weighted = (weighted.spline.evaluate(x[10]) - y[10]).abs();
        assert!(e_weighted < e_plain);
    }

    #[test]
    fn continuation_from_previous_knots() {
        let (x, y) = sine_data(25);
        let first = fit_smoothing_spline(&x, &y, 1e-3, &FitOptions::default()).unwrap();
        let n = first.spline.knots().len();
        let opts = FitOptions {
            initial_knots: Some(first.spline.knots()[4..n - 4].to_vec()),
            ..FitOptions::default()
        };
        let second = fit_smoothing_spline(&x, &y, 0.05, &opts).unwrap();
        assert!((second.residual - 0.05).abs() <= TOLERANCE * 0.05);
    }

    #[test]
    fn duplicate_abscissae_are_tolerated_when_smoothing() {
        // sin sampled every 0.5, with a second reading at x = 2 offset by +0.2.
        let (mut x, mut y) = sine_data(13);
        x.insert(5, 2.0);
        y.insert(5, 2.0f64.sin() + 0.2);
        let fit = fit_smoothing_spline(&x, &y, 0.05, &FitOptions::default()).unwrap();
        assert!((fit.residual - 0.05).abs() <= TOLERANCE * 0.05);
        let v = fit.spline.evaluate(2.0);
        assert!(v > 2.0f64.sin() - 0.1 && v < 2.0f64.sin() + 0.3, "v={v}");
    }

    #[test]
    fn duplicate_abscissae_bound_the_reachable_residual() {
        // Two readings 0.2 apart at the same x can never be closer than
        // 2 * 0.1² = 0.02 in total.
        let (mut x, mut y) = sine_data(13);
        x.insert(5, 2.0);
        y.insert(5, 2.0f64.sin() + 0.2);
        let err = fit_smoothing_spline(&x, &y, 0.01, &FitOptions::default()).unwrap_err();
        match err {
            SplineError::Fitting(FittingFailure::SmoothingUnreachable { fp, .. }) => {
                assert!(fp.is_finite() && fp >= 0.02 - 1e-9, "fp={fp}");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = fit_smoothing_spline(&x, &y, 0.0, &FitOptions::default()).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::DuplicateAbscissa { x: 2.0 }));
    }

    #[test]
    fn rejects_too_few_distinct_points() {
        let err = fit_smoothing_spline(&[0.0, 1.0, 1.0, 2.0, 2.0], &[0.0; 5], 0.1, &FitOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            SplineError::InsufficientData {
                degree: 3,
                required: 4,
                actual: 3
            }
        );
        let err = fit_smoothing_spline(&[], &[], 0.1, &FitOptions::default()).unwrap_err();
        assert!(matches!(err, SplineError::InsufficientData { actual: 0, .. }));
    }

    #[test]
    fn rejects_invalid_input() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, 1.0, 0.0];
        let opts = FitOptions::default();

        let err = fit_smoothing_spline(&[0.0, 2.0, 1.0, 3.0, 4.0], &y, 0.1, &opts).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::Unsorted { index: 2 }));

        let err = fit_smoothing_spline(&x, &[0.0, f64::NAN, 0.0, 1.0, 0.0], 0.1, &opts).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::NonFinite { index: 1 }));

        let err = fit_smoothing_spline(&x, &y, -1.0, &opts).unwrap_err();
        assert!(matches!(err, SplineError::Fitting(FittingFailure::InvalidSmoothing { .. })));

        let err = fit_smoothing_spline(&x, &y[..4], 0.1, &opts).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::LengthMismatch { x: 5, y: 4 }));

        let bad_degree = FitOptions {
            degree: 6,
            ..FitOptions::default()
        };
        let err = fit_smoothing_spline(&x, &y, 0.1, &bad_degree).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::InvalidDegree { degree: 6 }));

        let bad_weights = FitOptions {
            weights: Some(vec![1.0, 1.0, 0.0, 1.0, 1.0]),
            ..FitOptions::default()
        };
        let err = fit_smoothing_spline(&x, &y, 0.1, &bad_weights).unwrap_err();
        assert_eq!(err, SplineError::Fitting(FittingFailure::InvalidWeight { index: 2 }));

        let bad_bounds = FitOptions {
            bounds: Some((1.0, 4.0)),
            ..FitOptions::default()
        };
        let err = fit_smoothing_spline(&x, &y, 0.1, &bad_bounds).unwrap_err();
        assert!(matches!(err, SplineError::Fitting(FittingFailure::InvalidBounds { .. })));
    }

    #[test]
    fn wider_bounds_extend_the_base_interval() {
        let (x, y) = sine_data(13);
        let opts = FitOptions {
            bounds: Some((-1.0, 7.0)),
            ..FitOptions::default()
        };
        let fit = fit_smoothing_spline(&x, &y, 0.05, &opts).unwrap();
        assert_eq!(fit.spline.base_interval(), (-1.0, 7.0));
        assert_eq!(fit.bounds, (-1.0, 7.0));
    }
}
