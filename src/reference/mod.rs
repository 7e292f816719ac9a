//! Hexacyanide reference splines.
//!
//! Three splines are built from the embedded tables:
//!
//! | spline                | table | smoothing |
//! |-----------------------|-------|-----------|
//! | `ferro_spline`        | ferro | tight     |
//! | `smooth_ferro_spline` | ferro | loose     |
//! | `ferri_spline`        | ferri | tight     |
//!
//! There is no loose ferri-cyanide spline.
//!
//! Nothing is built implicitly: callers construct a `ReferenceSet` once and
//! share it (it is `Send + Sync`).

use crate::data::{load_table, sort_table};
use crate::domain::{ReferenceConfig, ReferenceTable, Species, Variant};
use crate::error::{ReferenceError, SplineError};
use crate::fit::FitOptions;
use crate::models::SmoothingSpline;

/// Every reference spline, keyed by species and variant.
pub const ENTRIES: [(Species, Variant); 3] = [
    (Species::Ferro, Variant::Tight),
    (Species::Ferro, Variant::Loose),
    (Species::Ferri, Variant::Tight),
];

/// The built reference splines.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    ferro: SmoothingSpline,
    smooth_ferro: SmoothingSpline,
    ferri: SmoothingSpline,
    config: ReferenceConfig,
}

impl ReferenceSet {
    /// Ferro-cyanide, tight smoothing.
    pub fn ferro_spline(&self) -> &SmoothingSpline {
        &self.ferro
    }

    /// Ferro-cyanide, loose smoothing.
    pub fn smooth_ferro_spline(&self) -> &SmoothingSpline {
        &self.smooth_ferro
    }

    /// Ferri-cyanide, tight smoothing.
    pub fn ferri_spline(&self) -> &SmoothingSpline {
        &self.ferri
    }

    /// Look up a spline; `(Ferri, Loose)` does not exist.
    pub fn spline(&self, species: Species, variant: Variant) -> Option<&SmoothingSpline> {
        match (species, variant) {
            (Species::Ferro, Variant::Tight) => Some(&self.ferro),
            (Species::Ferro, Variant::Loose) => Some(&self.smooth_ferro),
            (Species::Ferri, Variant::Tight) => Some(&self.ferri),
            (Species::Ferri, Variant::Loose) => None,
        }
    }

    /// All splines in `ENTRIES` order.
    pub fn entries(&self) -> [(Species, Variant, &SmoothingSpline); 3] {
        [
            (Species::Ferro, Variant::Tight, &self.ferro),
            (Species::Ferro, Variant::Loose, &self.smooth_ferro),
            (Species::Ferri, Variant::Tight, &self.ferri),
        ]
    }

    pub fn config(&self) -> &ReferenceConfig {
        &self.config
    }
}

/// Cubic smoothing spline through `table` with smoothing factor `s`.
///
/// The table must already be sorted by energy (see `data::sort_table`);
/// unsorted input is rejected rather than reordered.
pub fn fit_spline(table: &ReferenceTable, s: f64) -> Result<SmoothingSpline, SplineError> {
    fit_table(table, s, &ReferenceConfig::default())
}

/// Like `fit_spline`, with degree and extrapolation mode from `config`.
pub fn fit_table(table: &ReferenceTable, s: f64, config: &ReferenceConfig) -> Result<SmoothingSpline, SplineError> {
    let opts = FitOptions {
        degree: config.degree,
        ..FitOptions::default()
    };
    SmoothingSpline::fit_with(&table.energies(), &table.absorptions(), s, &opts, config.extrapolation)
}

/// Build all reference splines from the embedded tables.
pub fn build_reference_set(config: &ReferenceConfig) -> Result<ReferenceSet, ReferenceError> {
    build_with_tables(&load_table(Species::Ferro), &load_table(Species::Ferri), config)
}

/// Build all reference splines from the given tables (sorted here).
pub fn build_with_tables(
    ferro: &ReferenceTable,
    ferri: &ReferenceTable,
    config: &ReferenceConfig,
) -> Result<ReferenceSet, ReferenceError> {
    let ferro = sort_table(ferro);
    let ferri = sort_table(ferri);

    let build = |species: Species, variant: Variant| -> Result<SmoothingSpline, ReferenceError> {
        let table = match species {
            Species::Ferro => &ferro,
            Species::Ferri => &ferri,
        };
        let smoothing = config.smoothing(variant);
        let spline = fit_table(table, smoothing, config).map_err(|source| ReferenceError {
            species,
            variant,
            smoothing,
            source,
        })?;
        log::info!(
            "built {variant} {species}-cyanide spline: {} samples, {} knots, fp={:e} (s={smoothing:e})",
            table.len(),
            spline.knots().len(),
            spline.residual()
        );
        Ok(spline)
    };

    Ok(ReferenceSet {
        ferro: build(Species::Ferro, Variant::Tight)?,
        smooth_ferro: build(Species::Ferro, Variant::Loose)?,
        ferri: build(Species::Ferri, Variant::Tight)?,
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_sorted;
    use crate::domain::{Extrapolation, Sample};
    use crate::error::FittingFailure;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn default_set() -> ReferenceSet {
        build_reference_set(&ReferenceConfig::default()).unwrap()
    }

    #[test]
    fn ferro_spline_at_edge_onset() {
        let set = default_set();
        let v = set.ferro_spline().eval(7.12).unwrap();
        assert!(v.is_finite());
        assert!(v > 0.0 && v < 2.0, "ferro(7.12) = {v}");
        assert!((0.05..0.25).contains(&v), "ferro(7.12) = {v}");
    }

    #[test]
    fn residuals_match_smoothing_factors() {
        let set = default_set();
        for (species, variant, spline) in set.entries() {
            let s = set.config().smoothing(variant);
            assert_eq!(spline.smoothing_factor(), s);
            assert!(
                spline.residual() <= s * 1.001,
                "{variant} {species}: fp={} s={s}",
                spline.residual()
            );
        }
    }

    #[test]
    fn splines_stay_close_to_samples() {
        let set = default_set();
        for (species, variant, spline) in set.entries() {
            let table = load_sorted(species);
            let tolerance = match variant {
                Variant::Tight => 0.05,
                Variant::Loose => set.config().loose_smoothing.sqrt(),
            };
            for sample in &table.samples {
                let v = spline.eval(sample.energy_kev).unwrap();
                assert!(
                    (v - sample.absorption).abs() <= tolerance,
                    "{variant} {species} at {}: {v} vs {}",
                    sample.energy_kev,
                    sample.absorption
                );
            }
        }
    }

    #[test]
    fn loose_ferro_spline_is_coarser() {
        let set = default_set();
        assert!(set.smooth_ferro_spline().knots().len() < set.ferro_spline().knots().len());
        assert!(set.smooth_ferro_spline().residual() > set.ferro_spline().residual());
    }

    #[test]
    fn finite_inside_each_table_range() {
        let set = default_set();
        let mut rng = StdRng::seed_from_u64(7);
        for (species, _, spline) in set.entries() {
            let (lo, hi) = load_table(species).energy_range().unwrap();
            for _ in 0..500 {
                let x = rng.gen_range(lo..=hi);
                let v = spline.eval(x).unwrap();
                assert!(v.is_finite(), "{species} at {x}");
            }
        }
    }

    #[test]
    fn far_outside_queries_follow_extrapolation_mode() {
        let set = default_set();
        let ferro = set.ferro_spline();
        let extrapolated = ferro.eval(0.0).unwrap();
        assert!(extrapolated.is_finite());

        let zeros = ferro.clone().with_extrapolation(Extrapolation::Zeros);
        assert_eq!(zeros.eval(0.0).unwrap(), 0.0);

        let constant = ferro.clone().with_extrapolation(Extrapolation::Const);
        let (lo, _) = ferro.bounds();
        assert_eq!(constant.eval(0.0).unwrap(), ferro.eval(lo).unwrap());

        let raise = ferro.clone().with_extrapolation(Extrapolation::Raise);
        assert!(matches!(raise.eval(0.0), Err(SplineError::OutOfRange { .. })));
    }

    #[test]
    fn configured_extrapolation_applies_to_every_spline() {
        let config = ReferenceConfig {
            extrapolation: Extrapolation::Raise,
            ..ReferenceConfig::default()
        };
        let set = build_reference_set(&config).unwrap();
        for (_, _, spline) in set.entries() {
            assert!(spline.eval(100.0).is_err());
        }
    }

    #[test]
    fn no_loose_ferri_spline() {
        let set = default_set();
        assert!(set.spline(Species::Ferri, Variant::Loose).is_none());
        assert_eq!(
            set.spline(Species::Ferro, Variant::Loose),
            Some(set.smooth_ferro_spline())
        );
        assert_eq!(set.entries().len(), ENTRIES.len());
    }

    #[test]
    fn reference_set_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceSet>();

        let set = std::sync::Arc::new(default_set());
        let other = std::sync::Arc::clone(&set);
        let handle = std::thread::spawn(move || other.ferri_spline().eval(7.13).unwrap());
        let v = handle.join().unwrap();
        assert_eq!(v, set.ferri_spline().eval(7.13).unwrap());
    }

    #[test]
    fn fit_spline_requires_sorted_table() {
        let err = fit_spline(&load_table(Species::Ferro), 1e-4).unwrap_err();
        assert!(matches!(err, SplineError::Fitting(FittingFailure::Unsorted { .. })));
        assert!(fit_spline(&load_sorted(Species::Ferro), 1e-4).is_ok());
    }

    #[test]
    fn initialization_error_names_the_failing_spline() {
        let ferri = ReferenceTable::new(
            Species::Ferri,
            vec![Sample::new(7.11, 0.1), Sample::new(7.12, 0.5), Sample::new(7.13, 1.2)],
        );
        let err = build_with_tables(&load_table(Species::Ferro), &ferri, &ReferenceConfig::default())
            .unwrap_err();
        assert_eq!(err.species, Species::Ferri);
        assert_eq!(err.variant, Variant::Tight);
        assert_eq!(err.smoothing, 1e-4);
        assert!(matches!(err.source, SplineError::InsufficientData { actual: 3, .. }));
        assert!(err.to_string().contains("tight ferri-cyanide"));
    }

    #[test]
    fn invalid_override_reports_variant() {
        let config = ReferenceConfig {
            loose_smoothing: -1.0,
            ..ReferenceConfig::default()
        };
        let err = build_reference_set(&config).unwrap_err();
        assert_eq!((err.species, err.variant), (Species::Ferro, Variant::Loose));
    }
}
