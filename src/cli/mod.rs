//! Command-line parsing for `xasref`.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use clap::{Args, Parser, Subcommand};

use crate::domain::{Extrapolation, LOOSE_SMOOTHING, Species, TIGHT_SMOOTHING, Variant};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "xasref",
    version,
    about = "Hexacyanide Fe K-edge XAS reference splines"
)]
pub struct Cli {
    #[command(flatten)]
    pub smoothing: SmoothingArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Smoothing factor overrides, accepted before or after the subcommand.
#[derive(Debug, Args, Clone)]
pub struct SmoothingArgs {
    /// Smoothing factor of the tight ferro/ferri splines.
    #[arg(long, global = true, default_value_t = TIGHT_SMOOTHING)]
    pub tight_s: f64,

    /// Smoothing factor of the loose ferro spline.
    #[arg(long, global = true, default_value_t = LOOSE_SMOOTHING)]
    pub loose_s: f64,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a reference table as CSV (sorted by energy unless --unsorted).
    Table(TableArgs),
    /// Evaluate a reference spline (or a derivative) on an energy grid.
    Eval(EvalArgs),
    /// Print diagnostics for every reference spline.
    Summary(SummaryArgs),
    /// Plot samples and fitted spline in the terminal.
    Plot(PlotArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TableArgs {
    #[arg(short = 's', long, value_enum, default_value_t = Species::Ferro)]
    pub species: Species,

    /// Keep the embedded (digitization) order.
    #[arg(long)]
    pub unsorted: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    #[arg(short = 's', long, value_enum, default_value_t = Species::Ferro)]
    pub species: Species,

    /// Tight or loose smoothing (loose exists for ferro only).
    #[arg(short = 'v', long, value_enum, default_value_t = Variant::Tight)]
    pub variant: Variant,

    /// First energy (keV); defaults to the spline's lower bound.
    #[arg(long)]
    pub from: Option<f64>,

    /// Last energy (keV); defaults to the spline's upper bound.
    #[arg(long)]
    pub to: Option<f64>,

    /// Number of grid points.
    #[arg(long, default_value_t = 71)]
    pub steps: usize,

    /// Behaviour outside the fitted range.
    #[arg(long, value_enum)]
    pub extrapolation: Option<Extrapolation>,

    /// Derivative order (0 = value).
    #[arg(short = 'd', long, default_value_t = 0)]
    pub derivative: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// Emit JSON instead of a text table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    #[arg(short = 's', long, value_enum, default_value_t = Species::Ferro)]
    pub species: Species,

    #[arg(short = 'v', long, value_enum, default_value_t = Variant::Tight)]
    pub variant: Variant,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
