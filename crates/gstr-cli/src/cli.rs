//! CLI argument definitions for the GST return builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gstr_model::{DEFAULT_COUNTERPARTY_GSTIN, Quarter};

#[derive(Parser)]
#[command(
    name = "gstr",
    version,
    about = "GST return builder - turn sales sheets into an upload-ready return",
    long_about = "Build a GST return JSON document from exported sales sheets.\n\n\
                  Reads forward (outbound supply) and reverse (e-commerce operator)\n\
                  sheets as CSV or JSON and writes gst_return_<period>_<year>.json."
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

    /// Allow GSTINs and cell values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a monthly return from one forward and one reverse sheet.
    Monthly(MonthlyArgs),

    /// Build a quarterly return from three forward and three reverse sheets.
    Quarterly(QuarterlyArgs),

    /// List fiscal quarters with their months and period codes.
    Quarters,
}

/// Options shared by both filing commands.
#[derive(Args)]
pub struct FilingArgs {
    /// Taxpayer GSTIN.
    #[arg(long = "gstin", value_name = "GSTIN")]
    pub gstin: String,

    /// E-commerce operator GSTIN.
    #[arg(
        long = "etin",
        value_name = "GSTIN",
        default_value = DEFAULT_COUNTERPARTY_GSTIN
    )]
    pub etin: String,

    /// Filing year (default: current year).
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Directory for the generated return (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build and summarize the return without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the return JSON to stdout.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Args)]
pub struct MonthlyArgs {
    #[command(flatten)]
    pub filing: FilingArgs,

    /// Month number, 1-12.
    #[arg(long = "month", value_name = "MONTH")]
    pub month: String,

    /// Forward sheet (.csv or .json).
    #[arg(long = "forward", value_name = "FILE")]
    pub forward: PathBuf,

    /// Reverse sheet (.csv or .json).
    #[arg(long = "reverse", value_name = "FILE")]
    pub reverse: PathBuf,
}

#[derive(Args)]
pub struct QuarterlyArgs {
    #[command(flatten)]
    pub filing: FilingArgs,

    /// Fiscal quarter (Q1 = Apr-Jun ... Q4 = Jan-Mar).
    #[arg(long = "quarter", value_name = "QUARTER")]
    pub quarter: Quarter,

    /// Forward sheets for the three months, in calendar order.
    #[arg(long = "forward", value_name = "FILE", num_args = 3, required = true)]
    pub forward: Vec<PathBuf>,

    /// Reverse sheets for the three months, in calendar order.
    #[arg(long = "reverse", value_name = "FILE", num_args = 3, required = true)]
    pub reverse: Vec<PathBuf>,
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
