//! CLI argument definitions for the catch-up report generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kejar",
    version,
    about = "Generate immunization catch-up target reports",
    long_about = "Read an exported child-immunization workbook, keep the \
                  children with overdue doses, and write a styled catch-up \
                  report workbook."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Allow cell values (children's data) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a catch-up report from a source workbook.
    Generate(GenerateArgs),

    /// List the generated report's column layout for a cohort.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the source workbook (.xlsx).
    #[arg(value_name = "WORKBOOK")]
    pub source: PathBuf,

    /// Worksheet holding the exported immunization data.
    #[arg(long = "sheet", default_value = "Sheet1")]
    pub sheet_name: String,

    /// Cohort to report on.
    #[arg(long = "cohort", value_enum)]
    pub cohort: CohortArg,

    /// Row layout of the generated report.
    #[arg(long = "layout", value_enum, default_value = "spaced")]
    pub layout: LayoutArg,

    /// Report configuration file (YAML); the built-in schema is used when
    /// omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the generated file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reference date for age derivation and titles (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Cohort whose layout to list.
    #[arg(long = "cohort", value_enum)]
    pub cohort: CohortArg,

    /// Report configuration file (YAML); the built-in schema is used when
    /// omitted.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Cohort selector choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CohortArg {
    Bayi,
    Baduta,
}

/// Row layout choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Spaced,
    Compact,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
