//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the reference splines
//! - prints tables, grids, summaries and plots

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::{Cli, Command, EvalArgs, PlotArgs, SmoothingArgs, SummaryArgs, TableArgs};
use crate::domain::{ReferenceConfig, Species, Variant};
use crate::error::AppError;
use crate::models::SmoothingSpline;
use crate::reference::{ReferenceSet, build_reference_set};

/// Entry point for the `xasref` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv = rewrite_args(std::env::args().collect());
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(AppError::new(2, err.to_string().trim_end())),
    };

    let config = config_from_args(&cli.smoothing);
    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Eval(args) => handle_eval(args, &config),
        Command::Summary(args) => handle_summary(args, &config),
        Command::Plot(args) => handle_plot(args, &config),
    }
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let table = if args.unsorted {
        crate::data::load_table(args.species)
    } else {
        crate::data::load_sorted(args.species)
    };
    print!("{}", crate::report::format_table_csv(&table));
    Ok(())
}

fn handle_eval(args: EvalArgs, config: &ReferenceConfig) -> Result<(), AppError> {
    if args.steps == 0 {
        return Err(AppError::new(2, "--steps must be at least 1."));
    }
    let set = build(config)?;
    let mut spline = select(&set, args.species, args.variant)?.clone();
    if let Some(mode) = args.extrapolation {
        spline = spline.with_extrapolation(mode);
    }

    let (lo, hi) = spline.bounds();
    let from = args.from.unwrap_or(lo);
    let to = args.to.unwrap_or(hi);
    if !(from.is_finite() && to.is_finite()) {
        return Err(AppError::new(2, "--from/--to must be finite."));
    }
    let grid = energy_grid(from, to, args.steps);

    let values = if args.derivative == 0 {
        spline.eval_many(&grid)?
    } else {
        spline.derivative(args.derivative)?.eval_many(&grid)?
    };
    log::debug!(
        "evaluated {} {}-cyanide spline on {} points",
        args.variant,
        args.species,
        grid.len()
    );

    print!("{}", crate::report::format_grid_csv(&grid, &values, args.derivative));
    Ok(())
}

fn handle_summary(args: SummaryArgs, config: &ReferenceConfig) -> Result<(), AppError> {
    let set = build(config)?;
    let rows = crate::report::summarize(&set);
    if args.json {
        println!("{}", crate::report::summary_json(&rows)?);
    } else {
        print!("{}", crate::report::format_summary(&rows));
    }
    Ok(())
}

fn handle_plot(args: PlotArgs, config: &ReferenceConfig) -> Result<(), AppError> {
    let set = build(config)?;
    let spline = select(&set, args.species, args.variant)?;
    let table = crate::data::load_sorted(args.species);
    let plot = crate::plot::render_ascii_plot(&table.samples, spline.curve(), args.width, args.height)?;

    println!("{} {}-cyanide (s = {:e})", args.variant, args.species, spline.smoothing_factor());
    print!("{plot}");
    Ok(())
}

fn build(config: &ReferenceConfig) -> Result<ReferenceSet, AppError> {
    build_reference_set(config).map_err(|err| {
        log::error!("{err}");
        AppError::from(err)
    })
}

fn select(set: &ReferenceSet, species: Species, variant: Variant) -> Result<&SmoothingSpline, AppError> {
    set.spline(species, variant).ok_or_else(|| {
        AppError::new(
            2,
            format!("There is no {variant} {species}-cyanide spline (loose smoothing exists for ferro only)."),
        )
    })
}

pub fn config_from_args(args: &SmoothingArgs) -> ReferenceConfig {
    ReferenceConfig {
        tight_smoothing: args.tight_s,
        loose_smoothing: args.loose_s,
        ..ReferenceConfig::default()
    }
}

/// `steps` evenly spaced energies from `from` to `to` inclusive.
pub fn energy_grid(from: f64, to: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![from; steps];
    }
    let step = (to - from) / (steps - 1) as f64;
    (0..steps)
        .map(|i| if i + 1 == steps { to } else { from + step * i as f64 })
        .collect()
}

/// Rewrite argv so a bare `xasref` shows the summary.
///
/// Rules:
/// - `xasref`                       -> `xasref summary`
/// - `xasref --tight-s 1e-3`        -> `xasref --tight-s 1e-3 summary`
/// - `xasref --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("summary".to_string());
        return argv;
    };

    let is_top_level_help_or_version = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "-h" | "--help" | "-V" | "--version" | "help"));
    if is_top_level_help_or_version {
        return argv;
    }

    let has_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "table" | "eval" | "summary" | "plot"));
    if has_subcommand {
        return argv;
    }

    // Only global flags were given.
    if arg1.starts_with('-') {
        argv.push("summary".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_shows_summary() {
        assert_eq!(rewrite_args(args(&["xasref"])), args(&["xasref", "summary"]));
        assert_eq!(
            rewrite_args(args(&["xasref", "--loose-s", "0.02"])),
            args(&["xasref", "--loose-s", "0.02", "summary"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_are_untouched() {
        for argv in [
            args(&["xasref", "eval", "--species", "ferri"]),
            args(&["xasref", "--tight-s", "1e-3", "plot"]),
            args(&["xasref", "--help"]),
            args(&["xasref", "-V"]),
        ] {
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }

    #[test]
    fn config_maps_smoothing_overrides() {
        let cli = Cli::parse_from(rewrite_args(args(&["xasref", "--tight-s", "0.002"])));
        let config = config_from_args(&cli.smoothing);
        assert_eq!(config.tight_smoothing, 0.002);
        assert_eq!(config.loose_smoothing, 1e-2);
        assert_eq!(config.degree, 3);
        assert!(matches!(cli.command, Command::Summary(_)));
    }

    #[test]
    fn grid_includes_both_ends() {
        let grid = energy_grid(7.10, 7.17, 71);
        assert_eq!(grid.len(), 71);
        assert_eq!(grid[0], 7.10);
        assert_eq!(grid[70], 7.17);
        assert!((grid[10] - 7.11).abs() < 1e-12);
        assert_eq!(energy_grid(7.1, 7.2, 1), vec![7.1]);
        assert!(energy_grid(7.1, 7.2, 0).is_empty());
    }

    #[test]
    fn missing_loose_ferri_is_a_usage_error() {
        let set = build(&ReferenceConfig::default()).unwrap();
        let err = select(&set, Species::Ferri, Variant::Loose).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(select(&set, Species::Ferri, Variant::Tight).is_ok());
    }

    #[test]
    fn failed_build_maps_to_exit_code_3() {
        let config = ReferenceConfig {
            tight_smoothing: f64::NAN,
            ..ReferenceConfig::default()
        };
        let err = build(&config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("tight ferro-cyanide"));
    }
}
