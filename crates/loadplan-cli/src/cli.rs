//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "loadplan",
    version,
    about = "Loadplan Studio - ingest and validate factory production loadplans",
    long_about = "Ingest per-factory loadplan exports (CSV), resolve their \
                  heterogeneous layouts, and produce canonical validated \
                  orders, data-quality findings, and production statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse loadplan files into canonical orders.
    Parse(ParseArgs),

    /// Parse and validate, reporting severity-classified findings.
    Validate(ValidateArgs),

    /// Parse and print production statistics rollups.
    Stats(StatsArgs),

    /// Parse and export a consolidated order sheet as CSV.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Loadplan CSV files, one per factory.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Write canonical orders as JSON to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Reference date for year inference and windows (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Loadplan CSV files, one per factory.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Comma-separated canonical fields that must be present per row.
    #[arg(long = "required", value_name = "FIELDS")]
    pub required: Option<String>,

    /// Reference date for year inference and windows (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Loadplan CSV files, one per factory.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Reference date for year inference and windows (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Loadplan CSV files, one per factory.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output CSV path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,

    /// Reference date for year inference and windows (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
