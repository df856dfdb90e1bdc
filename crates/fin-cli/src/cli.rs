//! CLI argument definitions for the financial table profiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "finprof",
    version,
    about = "Financial table profiler - normalize and describe spreadsheet exports",
    long_about = "Normalize messy financial exports into canonical numbers and profile them.\n\n\
                  Understands currency symbols, parenthesized negatives, percentages,\n\
                  scientific notation, fractions, thousands separators and missing markers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Profile a table: orientation, periods, metrics and column statistics.
    Profile(ProfileArgs),

    /// Report which number formats occur in each column of a table.
    Audit(AuditArgs),

    /// Write the normalized table as CSV.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Table file (.csv, .tsv, .txt, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the profile as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Profiler settings file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Table file (.csv, .tsv, .txt, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the audit as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Table file (.csv, .tsv, .txt, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output CSV path (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Profiler settings file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
