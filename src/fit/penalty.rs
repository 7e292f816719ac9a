//! Smoothness penalty: discontinuity jumps of the k-th derivative.
//!
//! A degree-k spline is a polynomial between knots; its k-th derivative is
//! piecewise constant and jumps at each interior knot. Row `r` of the matrix
//! built here maps the coefficient vector to the jump at interior knot
//! `t[k + 1 + r]`. Driving all jumps to zero collapses the spline into a
//! single polynomial, which is the `λ → ∞` end of the smoothing search.
//!
//! Entries are scaled by `fac^k` with `fac` the number of knot intervals per
//! unit length, so the penalty does not depend on the units of x.

use nalgebra::DMatrix;

/// Jump matrix with `n - 2k - 2` rows and `n - k - 1` columns.
pub fn discontinuity_matrix(knots: &[f64], degree: usize) -> DMatrix<f64> {
    let k = degree;
    let n = knots.len();
    let ncoef = n - k - 1;
    let rows = n.saturating_sub(2 * k + 2);
    let mut out = DMatrix::zeros(rows, ncoef);
    if rows == 0 {
        return out;
    }

    let intervals = (ncoef - k) as f64;
    let fac = intervals / (knots[ncoef] - knots[k]);

    let mut h = vec![0.0; 2 * k + 2];
    for l in k + 1..n - k - 1 {
        let row = l - (k + 1);
        for j in 0..=k {
            h[j] = knots[l] - knots[l + j - k - 1];
            h[j + k + 1] = knots[l] - knots[l + j + 1];
        }
        for j in 0..=k + 1 {
            let mut prod = h[j];
            for i in 1..=k {
                prod *= h[j + i] * fac;
            }
            let col = row + j;
            out[(row, col)] = (knots[col + k + 1] - knots[col]) / prod;
        }
    }
    out
}
