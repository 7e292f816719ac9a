//! Embedded reference tables.
//!
//! The samples are compiled in; nothing is read at runtime. `load_table`
//! hands out the literal rows in digitization order and `sort_table` puts
//! them in the energy order the fitter requires.

pub mod ferri;
pub mod ferro;

use crate::domain::{ReferenceTable, Species};

pub use ferri::FERRI_CYANIDE;
pub use ferro::FERRO_CYANIDE;

/// Literal samples for `species`, unsorted and unvalidated.
pub fn load_table(species: Species) -> ReferenceTable {
    let samples = match species {
        Species::Ferro => FERRO_CYANIDE.to_vec(),
        Species::Ferri => FERRI_CYANIDE.to_vec(),
    };
    ReferenceTable::new(species, samples)
}

/// Return a copy of `table` ordered by ascending energy.
///
/// The sort is stable, so samples with equal energy keep their relative
/// order. No sample is dropped, merged, or modified.
pub fn sort_table(table: &ReferenceTable) -> ReferenceTable {
    let mut samples = table.samples.clone();
    samples.sort_by(|a, b| a.energy_kev.total_cmp(&b.energy_kev));
    ReferenceTable::new(table.species, samples)
}

/// Load and sort in one step.
pub fn load_sorted(species: Species) -> ReferenceTable {
    sort_table(&load_table(species))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sample;

    fn sample_key(s: &Sample) -> (u64, u64) {
        (s.energy_kev.to_bits(), s.absorption.to_bits())
    }

    #[test]
    fn embedded_tables_have_expected_sizes() {
        assert_eq!(load_table(Species::Ferro).len(), 119);
        assert_eq!(load_table(Species::Ferri).len(), 121);
    }

    #[test]
    fn embedded_tables_are_not_presorted() {
        // Both tables contain late additions appended out of order.
        assert!(!load_table(Species::Ferro).is_sorted());
        assert!(!load_table(Species::Ferri).is_sorted());
    }

    #[test]
    fn embedded_values_are_finite() {
        for species in Species::ALL {
            for s in &load_table(species).samples {
                assert!(s.energy_kev.is_finite() && s.absorption.is_finite());
            }
        }
    }

    #[test]
    fn energy_ranges_match_digitized_figures() {
        let (lo, hi) = load_table(Species::Ferro).energy_range().unwrap();
        assert_eq!(lo, 7.095);
        assert!((hi - 7.169555795019157).abs() < 1e-12);

        let (lo, hi) = load_table(Species::Ferri).energy_range().unwrap();
        assert_eq!(lo, 7.105);
        assert!((hi - 7.17000255131174).abs() < 1e-12);
    }

    #[test]
    fn sort_orders_by_energy_and_preserves_multiset() {
        for species in Species::ALL {
            let raw = load_table(species);
            let sorted = sort_table(&raw);

            assert_eq!(sorted.species, species);
            assert_eq!(sorted.len(), raw.len());
            assert!(sorted.is_sorted());

            let mut a: Vec<_> = raw.samples.iter().map(sample_key).collect();
            let mut b: Vec<_> = sorted.samples.iter().map(sample_key).collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn sort_is_idempotent() {
        for species in Species::ALL {
            let once = sort_table(&load_table(species));
            let twice = sort_table(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let table = ReferenceTable::new(
            Species::Ferro,
            vec![
                Sample::new(2.0, 0.2),
                Sample::new(1.0, 0.1),
                Sample::new(2.0, 0.3),
                Sample::new(2.0, 0.1),
            ],
        );
        let sorted = sort_table(&table);
        let ys: Vec<f64> = sorted.samples.iter().map(|s| s.absorption).collect();
        assert_eq!(ys, vec![0.1, 0.2, 0.3, 0.1]);
    }

    #[test]
    fn sorted_tables_have_no_exact_duplicate_energies() {
        // The tables carry near-duplicates (e.g. around 7.1297 and 7.1305 keV
        // in the ferro data) but no exact ties; the closest ferro pair is
        // about 5.5e-5 keV apart.
        for species in Species::ALL {
            let sorted = load_sorted(species);
            let min_gap = sorted
                .samples
                .windows(2)
                .map(|w| w[1].energy_kev - w[0].energy_kev)
                .fold(f64::INFINITY, f64::min);
            assert!(min_gap > 5e-5, "{species}: min gap {min_gap}");
            assert!(min_gap < 1e-4, "{species}: min gap {min_gap}");
        }
    }
}
