//! Reporting utilities: per-spline diagnostics and formatted terminal output.

pub mod format;

use serde::Serialize;

use crate::data::load_sorted;
use crate::domain::{Species, Variant};
use crate::fit::FitKind;
use crate::reference::ReferenceSet;

pub use format::*;

/// Diagnostics for one reference spline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplineSummary {
    pub species: Species,
    pub variant: Variant,
    pub smoothing: f64,
    pub degree: usize,
    pub samples: usize,
    pub knots: usize,
    /// Weighted sum of squared residuals.
    pub residual: f64,
    pub max_abs_residual: f64,
    pub energy_min: f64,
    pub energy_max: f64,
    pub fit: &'static str,
}

/// One summary row per spline in the set.
pub fn summarize(set: &ReferenceSet) -> Vec<SplineSummary> {
    set.entries()
        .into_iter()
        .map(|(species, variant, spline)| {
            let (energy_min, energy_max) = load_sorted(species).energy_range().unwrap_or(spline.bounds());
            SplineSummary {
                species,
                variant,
                smoothing: spline.smoothing_factor(),
                degree: spline.degree(),
                samples: spline.sample_count(),
                knots: spline.knots().len(),
                residual: spline.residual(),
                max_abs_residual: spline.max_abs_residual(),
                energy_min,
                energy_max,
                fit: fit_label(spline.kind()),
            }
        })
        .collect()
}

fn fit_label(kind: FitKind) -> &'static str {
    match kind {
        FitKind::Interpolating => "interpolating",
        FitKind::Polynomial => "polynomial",
        FitKind::LeastSquares => "least-squares",
        FitKind::Penalized { .. } => "penalized",
    }
}
