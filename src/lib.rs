//! `hexacyanide-ref` library crate.
//!
//! Fe K-edge X-ray absorption references for ferro- and ferri-cyanide,
//! digitized from published spectra and turned into smoothing splines.
//!
//! The binary (`xasref`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the reference splines can be embedded in other analysis code

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
pub mod plot;
pub mod reference;
pub mod report;

pub use reference::{ReferenceSet, build_reference_set, build_with_tables, fit_spline};
