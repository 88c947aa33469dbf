//! CLI argument parsing for filterbench

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::report::DEFAULT_DELAY_MS;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON report plus chart series
    Json,
    /// CSV rows for spreadsheet analysis
    Csv,
}

/// Which report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    /// Measured timings, differences and ratios
    Experimental,
    /// Model equations only
    Theoretical,
    /// Measured vs predicted with errors and coefficient statistics (default)
    Complete,
}

impl ReportMode {
    pub fn name(self) -> &'static str {
        match self {
            ReportMode::Experimental => "experimental",
            ReportMode::Theoretical => "theoretical",
            ReportMode::Complete => "complete",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filterbench")]
#[command(version)]
#[command(
    about = "Benchmark imperative vs higher-order even filtering and report against linear models",
    long_about = None
)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare measured timings against the linear models
    Report(ReportArgs),
    /// Time both filtering strategies over 0..n
    Bench(BenchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Report to print
    #[arg(long, value_enum, default_value = "complete")]
    pub mode: ReportMode,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML scenario file replacing the built-in measurements and models
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Leave chart series out of JSON output
    #[arg(long = "no-chart")]
    pub no_chart: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            mode: ReportMode::Complete,
            format: OutputFormat::Text,
            scenario: None,
            no_chart: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Comma-separated sample sizes (default: 100000,1000000,5000000,10000000)
    #[arg(long, value_name = "N,...", value_delimiter = ',')]
    pub sizes: Option<Vec<u64>>,

    /// Append a 50,000,000 element stress run
    #[arg(long)]
    pub stress: bool,

    /// Artificial delay before each timed run, in milliseconds
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Feed the measured timings into a model-fit report afterwards
    #[arg(long)]
    pub report: bool,

    /// Scenario file supplying the models for --report
    #[arg(long, value_name = "FILE", requires = "report")]
    pub scenario: Option<PathBuf>,

    /// Output format for the --report section and the raw records
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}
