//! Formatted terminal output: CSV for tables and evaluation grids, a text
//! summary, and its JSON equivalent.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (snapshot-style tests below)

use crate::domain::ReferenceTable;
use crate::error::AppError;
use crate::report::SplineSummary;

/// `energy_kev,absorption` rows for every sample.
pub fn format_table_csv(table: &ReferenceTable) -> String {
    let mut out = String::from("energy_kev,absorption\n");
    for s in &table.samples {
        out.push_str(&format!("{},{}\n", s.energy_kev, s.absorption));
    }
    out
}

/// Evaluation grid as CSV; `derivative > 0` labels the value column accordingly.
pub fn format_grid_csv(energies: &[f64], values: &[f64], derivative: usize) -> String {
    let column = if derivative == 0 {
        "absorption".to_string()
    } else {
        format!("d{derivative}_absorption")
    };
    let mut out = format!("energy_kev,{column}\n");
    for (x, y) in energies.iter().zip(values) {
        out.push_str(&format!("{x:.6},{y:.9}\n"));
    }
    out
}

/// Human-readable diagnostics table.
pub fn format_summary(rows: &[SplineSummary]) -> String {
    let mut out = String::new();
    out.push_str("=== xasref - hexacyanide reference splines ===\n");

    out.push_str(
        format!(
            "{:<8} {:<8} {:>9} {:>7} {:>6} {:>11} {:>9} {:>21} {:<13}\n",
            "species", "variant", "s", "samples", "knots", "fp", "max|r|", "energy [keV]", "fit"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<8} {:-<8} {:-<9} {:-<7} {:-<6} {:-<11} {:-<9} {:-<21} {:-<13}\n",
            "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:<8} {:<8} {:>9.1e} {:>7} {:>6} {:>11.4e} {:>9.5} {:>21} {:<13}\n",
                r.species.name(),
                r.variant.name(),
                r.smoothing,
                r.samples,
                r.knots,
                r.residual,
                r.max_abs_residual,
                format!("[{:.4}, {:.4}]", r.energy_min, r.energy_max),
                r.fit,
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// Summary rows as pretty-printed JSON.
pub fn summary_json(rows: &[SplineSummary]) -> Result<String, AppError> {
    serde_json::to_string_pretty(rows).map_err(|e| AppError::new(4, format!("Failed to serialize summary: {e}")))
}
