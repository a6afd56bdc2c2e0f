//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use addrnorm_cli::CleanRequest;
use addrnorm_model::{DEFAULT_ENCODING, NormalizeOptions, PipelineConfig, ZipValidation};

#[derive(Parser)]
#[command(
    name = "addrnorm",
    version,
    about = "Normalize fixed-layout name and address tables",
    long_about = "Clean a name/address export into a fixed schema.\n\n\
                  Derives name, address, city, state, cusip and a zero-padded\n\
                  5-digit ZIP from the positional source lines."
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

    /// Allow row values (names, addresses) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean one source file.
    Clean(CleanArgs),

    /// Show the expected source columns and the columns they map to.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Source CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: cleaned_data.csv next to INPUT).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Text encoding of INPUT (any WHATWG label, e.g. utf-8, latin1).
    #[arg(long = "encoding", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Accept ZIPs made of digits and hyphens instead of digits only.
    ///
    /// Hyphenated forms such as 12345-6789 are only split in this mode.
    #[arg(long = "permissive-zip")]
    pub permissive_zip: bool,

    /// Keep the Zip+4 column in the output.
    #[arg(long = "keep-zip4")]
    pub keep_zip4: bool,

    /// Run every stage and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the run report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Do not print the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

impl CleanArgs {
    pub fn to_request(&self) -> CleanRequest {
        let zip_validation = if self.permissive_zip {
            ZipValidation::Permissive
        } else {
            ZipValidation::Strict
        };
        let config = PipelineConfig {
            normalize: NormalizeOptions::new()
                .with_zip_validation(zip_validation)
                .with_keep_zip4(self.keep_zip4),
            ..PipelineConfig::default()
        }
        .with_encoding(self.encoding.as_str())
        .with_interactive_io(!self.no_summary);

        let request = CleanRequest::new(&self.input)
            .with_config(config)
            .with_dry_run(self.dry_run);
        match &self.output {
            Some(path) => request.with_output(path),
            None => request,
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
