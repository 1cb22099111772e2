//! CLI argument definitions for drill-hole checks.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drill_cli::config::{DatasetFiles, RunOverrides};

#[derive(Parser)]
#[command(
    name = "drillcheck",
    version,
    about = "Validate drill-hole logging, sampling, and QC data for one hole",
    long_about = "Validate drill-hole datasets for a single hole.\n\n\
                  Checks lithology codes, sample lengths, alteration logging,\n\
                  depth interval consistency, Major rock types, and the QC sample ratio."
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

    /// Allow cell values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check (clito, unit) pairs in the Geology dataset.
    Geology(RunArgs),

    /// Merge samples with standards and check sample lengths.
    Samples(RunArgs),

    /// Check alteration intensity/distribution pairs.
    Alteration(RunArgs),

    /// Check secondary depth intervals against sample depths.
    Intervals(RunArgs),

    /// Check Major rock types against contained Geology units.
    Major(RunArgs),

    /// Compute the share of QC samples.
    Ratio(RunArgs),

    /// Run every rule whose inputs were supplied.
    All(RunArgs),

    /// Print the lithology and rock-type lookup tables.
    Tables,
}

#[derive(Args, Clone, Default)]
pub struct RunArgs {
    /// Drill-hole id to check.
    #[arg(long = "hole", value_name = "HOLE")]
    pub hole: Option<String>,

    /// TOML run file with `hole`, `output_dir`, and `[datasets]` paths.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long = "geology", value_name = "CSV")]
    pub geology: Option<PathBuf>,

    #[arg(long = "sample", value_name = "CSV")]
    pub sample: Option<PathBuf>,

    #[arg(long = "standards", value_name = "CSV")]
    pub standards: Option<PathBuf>,

    #[arg(long = "alteration", value_name = "CSV")]
    pub alteration: Option<PathBuf>,

    #[arg(long = "mine", value_name = "CSV")]
    pub mine: Option<PathBuf>,

    #[arg(long = "major", value_name = "CSV")]
    pub major: Option<PathBuf>,

    /// Write each result table as CSV into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write `summary.json` (into the output directory, or the working directory).
    #[arg(long = "json")]
    pub json: bool,
}

impl RunArgs {
    pub fn overrides(&self) -> RunOverrides {
        RunOverrides {
            hole: self.hole.clone(),
            output_dir: self.output_dir.clone(),
            datasets: DatasetFiles {
                geology: self.geology.clone(),
                sample: self.sample.clone(),
                standards: self.standards.clone(),
                alteration: self.alteration.clone(),
                mine: self.mine.clone(),
                major: self.major.clone(),
            },
            json_summary: self.json,
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
