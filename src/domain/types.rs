//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be
//! printed by the CLI (CSV / JSON) as well as used in-memory during fitting.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default smoothing factor for the "exact-fit" reference splines.
pub const TIGHT_SMOOTHING: f64 = 1e-4;

/// Default smoothing factor for the coarser ferro-cyanide variant.
pub const LOOSE_SMOOTHING: f64 = 1e-2;

/// Cubic splines throughout unless configured otherwise.
pub const DEFAULT_DEGREE: usize = 3;

/// One digitized point: photon energy (keV) and normalized absorption.
///
/// Absorption can be slightly negative; that is digitization noise around the
/// pre-edge baseline, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub energy_kev: f64,
    pub absorption: f64,
}

impl Sample {
    pub const fn new(energy_kev: f64, absorption: f64) -> Self {
        Self {
            energy_kev,
            absorption,
        }
    }
}

/// Hexacyanide anion whose Fe K-edge spectrum is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Ferrocyanide, [Fe(CN)6]4-.
    Ferro,
    /// Ferricyanide, [Fe(CN)6]3-.
    Ferri,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Ferro, Species::Ferri];

    pub fn name(self) -> &'static str {
        match self {
            Species::Ferro => "ferro",
            Species::Ferri => "ferri",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smoothing configuration of a reference spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Low smoothing factor; traces the digitized points closely.
    Tight,
    /// Higher smoothing factor; coarser approximation (ferro only).
    Loose,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Tight => "tight",
            Variant::Loose => "loose",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a spline returns for queries outside its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Continue the boundary polynomial pieces.
    #[default]
    Extrapolate,
    /// Return 0.
    Zeros,
    /// Return `SplineError::OutOfRange`.
    Raise,
    /// Return the value at the nearest boundary.
    Const,
}

/// Samples of one species.
///
/// The embedded tables are *not* sorted; see `data::sort_table`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub species: Species,
    pub samples: Vec<Sample>,
}

impl ReferenceTable {
    pub fn new(species: Species, samples: Vec<Sample>) -> Self {
        Self { species, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.energy_kev).collect()
    }

    pub fn absorptions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.absorption).collect()
    }

    /// `(min, max)` energy, or `None` for an empty table.
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.samples {
            lo = lo.min(s.energy_kev);
            hi = hi.max(s.energy_kev);
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }

    /// True when energies never decrease.
    pub fn is_sorted(&self) -> bool {
        self.samples
            .windows(2)
            .all(|w| w[0].energy_kev <= w[1].energy_kev)
    }
}

/// Settings used to build a `ReferenceSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub tight_smoothing: f64,
    pub loose_smoothing: f64,
    pub degree: usize,
    pub extrapolation: Extrapolation,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            tight_smoothing: TIGHT_SMOOTHING,
            loose_smoothing: LOOSE_SMOOTHING,
            degree: DEFAULT_DEGREE,
            extrapolation: Extrapolation::Extrapolate,
        }
    }
}

impl ReferenceConfig {
    pub fn smoothing(&self, variant: Variant) -> f64 {
        match variant {
            Variant::Tight => self.tight_smoothing,
            Variant::Loose => self.loose_smoothing,
        }
    }
}
