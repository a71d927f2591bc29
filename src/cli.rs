// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::ViewMode;

/// Command-line arguments for `stepgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepgraph",
    version,
    about = "Lay out and style workflow step graphs for rendering.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a JSON file holding the step list (templates or tasks).
    #[arg(long, value_name = "PATH")]
    pub input: String,

    /// Which step shape the input holds: `template` or `execution`.
    #[arg(long, value_name = "MODE", default_value = "template")]
    pub mode: ViewMode,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Stepgraph.toml` in the current directory is used when it
    /// exists, otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Keep re-reading the input on an interval and print every changed graph.
    #[arg(long)]
    pub watch: bool,

    /// Override `[refresh].interval_secs` from the config.
    #[arg(long, value_name = "SECS")]
    pub interval_secs: Option<u64>,

    /// Print the sorted steps, edges and diagnostics instead of JSON.
    #[arg(long)]
    pub dry_run: bool,

    /// Pretty-print the JSON output (ignored with `--watch`).
    #[arg(long)]
    pub pretty: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
