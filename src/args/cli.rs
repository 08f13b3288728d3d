use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Benchmark HTTP APIs with rate-controlled load per test case and record every response."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Measure benchmark for one or more HTTP APIs
    Measure(MeasureArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct MeasureArgs {
    /// Input CSV file: one `query,concurrency` test case per row
    #[arg(long = "file-input", short = 'i')]
    pub file_input: Option<String>,

    /// API address to benchmark (repeat or comma-separate, at most 2)
    #[arg(long = "api", short = 'a', value_delimiter = ',')]
    pub apis: Vec<String>,

    /// Output folder for response/latency CSV files [default: ./output]
    #[arg(long = "output", short = 'o')]
    pub output: Option<String>,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Pacing window: `concurrency` requests are sent per interval [default: 100ms]
    #[arg(long = "interval", value_parser = parse_duration_arg)]
    pub interval: Option<Duration>,

    /// Total attack duration per test case [default: 100ms]
    #[arg(long = "duration", value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Per-request timeout [default: 30s]
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Write a JSON report of all aggregate metrics to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,
}
