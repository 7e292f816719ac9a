//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - digitized samples and per-species tables (`Sample`, `ReferenceTable`)
//! - selector enums (`Species`, `Variant`, `Extrapolation`)
//! - build configuration (`ReferenceConfig`)

pub mod types;

pub use types::*;
