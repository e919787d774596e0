//! CLI argument definitions for the Clarus analytics tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clarus",
    version,
    about = "Clarus Pharmacy Analytics - business and clinical metrics from transaction data",
    long_about = "Analyze pharmacy point-of-sale transaction data.\n\n\
                  Derives revenue mix, category rankings, refill compliance, insurance\n\
                  utilization, seasonal trends, and clinical-service uptake from a\n\
                  transaction CSV, rendered as terminal tables or JSON."
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
    /// Analyze a transaction file and print the metric summaries.
    Analyze(AnalyzeArgs),

    /// List the analytical views a transaction file has data for.
    Views(ViewsArgs),

    /// Print the required input columns and accepted formats.
    Schema,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the transaction CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Month to analyze (default: the most recent month in the data).
    #[arg(long = "month", value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Analyze the whole file instead of a single month.
    #[arg(long = "all", conflicts_with = "month")]
    pub all: bool,

    /// Start of a date-range refinement, applied after the month filter.
    #[arg(long = "from", value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// End of the date-range refinement (inclusive).
    #[arg(long = "to", value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,

    /// How many categories to show in the ranking tables.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Output format for the summaries.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write analytics_report.json into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export the filtered transactions (base columns only) to this CSV path.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ViewsArgs {
    /// Path to the transaction CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
