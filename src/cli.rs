// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `mermaid2drawio`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mermaid2drawio",
    version,
    about = "Convert a Mermaid gantt chart into a draw.io (mxGraph) XML file.",
    long_about = None
)]
pub struct CliArgs {
    /// Input mermaid file containing a `gantt` block.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output draw.io XML file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path to an optional layout config file (TOML).
    ///
    /// If omitted, built-in layout defaults are used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MERMAID2DRAWIO_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + resolve, print the task table, but don't write any output.
    #[arg(long)]
    pub dry_run: bool,
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
