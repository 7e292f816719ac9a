//! B-spline kernels.
//!
//! A spline of degree `k` is stored FITPACK-style as a knot vector `t` of
//! length `n` and `n - k - 1` coefficients. The base interval is
//! `[t[k], t[n - k - 1]]`; outside it the first/last polynomial piece is
//! continued.
//!
//! Everything here is plain slices-in, values-out so the fitter can build
//! design rows without allocating a spline first.

/// Locate the knot span `l` (with `t[l] <= x < t[l + 1]`) used to evaluate at `x`.
///
/// The result is clamped to `k ..= n - k - 2`, so points left of the base
/// interval use the first piece and points at or right of its end use the last.
pub fn find_span(knots: &[f64], degree: usize, x: f64) -> usize {
    let n = knots.len();
    let last = n - degree - 2;
    // Interior breakpoints t[k+1] ..= t[n-k-2].
    let interior = &knots[degree + 1..=last];
    degree + interior.partition_point(|&t| t <= x)
}

/// Values of the `k + 1` B-splines that are non-zero on span `span` at `x`.
///
/// `out[i]` is the value of B-spline `span - k + i`. Cox–de Boor recurrence.
///
/// # Panics
/// Panics if `out.len() < degree + 1`.
pub fn basis_values(knots: &[f64], degree: usize, span: usize, x: f64, out: &mut [f64]) {
    let mut scratch = [0.0_f64; MAX_ORDER];
    out[0] = 1.0;
    for j in 1..=degree {
        scratch[..j].copy_from_slice(&out[..j]);
        out[0] = 0.0;
        for i in 1..=j {
            let li = span + i;
            let lj = li - j;
            let f = scratch[i - 1] / (knots[li] - knots[lj]);
            out[i - 1] += f * (knots[li] - x);
            out[i] = f * (x - knots[lj]);
        }
    }
}

/// Highest supported spline order (degree + 1), with room for antiderivatives.
pub const MAX_ORDER: usize = 12;

/// A spline in B-spline form.
#[derive(Debug, Clone, PartialEq)]
pub struct BSpline {
    knots: Vec<f64>,
    coeffs: Vec<f64>,
    degree: usize,
}

impl BSpline {
    /// Build a spline from a full knot vector (boundary knots repeated
    /// `degree + 1` times) and its coefficients.
    ///
    /// # Panics
    /// Panics if `coeffs.len() != knots.len() - degree - 1` or the degree is
    /// not below `MAX_ORDER`.
    pub fn new(knots: Vec<f64>, coeffs: Vec<f64>, degree: usize) -> Self {
        assert!(degree < MAX_ORDER, "degree {degree} is too large");
        assert_eq!(
            coeffs.len() + degree + 1,
            knots.len(),
            "coefficient count does not match knot vector"
        );
        Self {
            knots,
            coeffs,
            degree,
        }
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `[t[k], t[n - k - 1]]`.
    pub fn base_interval(&self) -> (f64, f64) {
        let n = self.knots.len();
        (self.knots[self.degree], self.knots[n - self.degree - 1])
    }

    /// Knots of the base interval without boundary repetition.
    pub fn distinct_knots(&self) -> &[f64] {
        let n = self.knots.len();
        &self.knots[self.degree..n - self.degree]
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let k = self.degree;
        let span = find_span(&self.knots, k, x);
        let mut values = [0.0_f64; MAX_ORDER];
        basis_values(&self.knots, k, span, x, &mut values);
        values[..=k]
            .iter()
            .zip(&self.coeffs[span - k..=span])
            .map(|(b, c)| b * c)
            .sum()
    }

    /// The `order`-th derivative as a spline of degree `k - order`.
    ///
    /// Returns `None` when `order` exceeds the degree.
    pub fn derivative(&self, order: usize) -> Option<BSpline> {
        if order > self.degree {
            return None;
        }
        let mut spline = self.clone();
        for _ in 0..order {
            spline = spline.differentiate_once();
        }
        Some(spline)
    }

    /// The `order`-th antiderivative, zero at the left end of the base interval.
    pub fn antiderivative(&self, order: usize) -> BSpline {
        let mut spline = self.clone();
        for _ in 0..order {
            spline = spline.integrate_once();
        }
        spline
    }

    fn differentiate_once(&self) -> BSpline {
        let k = self.degree;
        let t = &self.knots;
        let coeffs: Vec<f64> = self
            .coeffs
            .windows(2)
            .enumerate()
            .map(|(i, c)| {
                let span = t[i + k + 1] - t[i + 1];
                if span > 0.0 {
                    k as f64 * (c[1] - c[0]) / span
                } else {
                    0.0
                }
            })
            .collect();
        let knots = t[1..t.len() - 1].to_vec();
        BSpline::new(knots, coeffs, k - 1)
    }

    fn integrate_once(&self) -> BSpline {
        let k = self.degree;
        let t = &self.knots;
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        let mut acc = 0.0;
        for (i, c) in self.coeffs.iter().enumerate() {
            acc += c * (t[i + k + 1] - t[i]) / (k + 1) as f64;
            coeffs.push(acc);
        }

        let mut knots = Vec::with_capacity(t.len() + 2);
        knots.push(t[0]);
        knots.extend_from_slice(t);
        knots.push(t[t.len() - 1]);
        BSpline::new(knots, coeffs, k + 1)
    }
}

/// Full knot vector: `xb` and `xe` each repeated `degree + 1` times around `interior`.
pub fn clamped_knots(xb: f64, xe: f64, interior: &[f64], degree: usize) -> Vec<f64> {
    let mut knots = Vec::with_capacity(interior.len() + 2 * (degree + 1));
    knots.extend(std::iter::repeat_n(xb, degree + 1));
    knots.extend_from_slice(interior);
    knots.extend(std::iter::repeat_n(xe, degree + 1));
    knots
}
