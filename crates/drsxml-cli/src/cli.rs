//! CLI argument definitions for the deposit converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drsxml_ingest::RecordKind;

#[derive(Parser)]
#[command(
    name = "drsxml",
    version,
    about = "Convert book review and proceedings spreadsheets to Crossref deposit XML",
    long_about = "Convert book review and conference proceedings spreadsheets to Crossref\n\
                  doi_batch 5.3.0 deposit files.\n\n\
                  Reads CSV, XLSX, XLS, XLSB and ODS inputs."
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

    /// Log output format.
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
    /// Convert a spreadsheet into a doi_batch deposit file.
    Convert(ConvertArgs),

    /// Load a spreadsheet and list its normalized records.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Spreadsheet or CSV file with one record per row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Collection metadata JSON (required for proceedings).
    #[arg(long = "collection", value_name = "JSON")]
    pub collection: Option<PathBuf>,

    /// Depositor configuration JSON (default: built-in depositor).
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Directory for the generated XML file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Print the XML to stdout instead of writing a file.
    #[arg(long = "stdout", conflicts_with = "output_dir")]
    pub stdout: bool,

    /// Validate the XML against this schema before writing it.
    #[arg(long = "validate", value_name = "XSD")]
    pub validate: Option<PathBuf>,

    /// Record layout of the input.
    #[arg(long = "kind", value_enum, default_value = "auto")]
    pub kind: KindArg,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Spreadsheet or CSV file with one record per row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Record layout of the input.
    #[arg(long = "kind", value_enum, default_value = "auto")]
    pub kind: KindArg,
}

/// Record layout choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Auto,
    BookReviews,
    Proceedings,
}

impl KindArg {
    pub fn record_kind(self) -> Option<RecordKind> {
        match self {
            KindArg::Auto => None,
            KindArg::BookReviews => Some(RecordKind::BookReviews),
            KindArg::Proceedings => Some(RecordKind::Proceedings),
        }
    }
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
