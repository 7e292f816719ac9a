//! Linear least squares solvers.
//!
//! Every spline fit reduces to a (possibly penalized) linear least squares
//! problem in the B-spline coefficients:
//!
//! ```text
//! minimize Σ (w_i (y_i - B_i c))² + λ Σ (D_j c)²
//! ```
//!
//! The coefficient count stays small (a few hundred at most), so we form the
//! normal equations and factor them with Cholesky. When that factorization
//! fails (a basis function with no data support, or λ so large the system
//! loses definiteness numerically) the caller falls back to SVD on the
//! stacked design matrix.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Solve the symmetric positive definite system `a · c = b` via Cholesky.
///
/// Returns `None` if `a` is not numerically positive definite.
pub fn solve_normal_equations(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let chol = a.cholesky()?;
    let c = chol.solve(b);
    if c.iter().all(|v| v.is_finite()) {
        Some(c)
    } else {
        None
    }
}
