//! CLI argument definitions for the record validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pdv",
    version,
    about = "Validate a batch of personal records",
    long_about = "Validate a batch of personal records read from a Windows-1251 JSON file.\n\n\
                  Valid records are written to the output file; the number of records\n\
                  failing each rule is printed to the console."
)]
pub struct Cli {
    /// JSON file with the records to validate (Windows-1251 encoded).
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = "records.json")]
    pub input: PathBuf,

    /// Report file receiving every valid record.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "valid_records.txt"
    )]
    pub output: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include record field values in trace logs (personal data).
    #[arg(long = "log-data")]
    pub log_data: bool,
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
