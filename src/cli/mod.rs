//! CLI argument parsing for gobuilder.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use gobuilder::pipeline::OutputFormat;
use std::path::PathBuf;

/// gobuilder: deterministic Go build commands for provenance pipelines.
///
/// Reads a declarative build config, resolves its ldflags template against
/// pipeline-supplied substitutions, and emits the exact compiler command and
/// environment for the next pipeline stage.
#[derive(Parser, Debug)]
#[command(name = "gobuilder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log every pipeline stage to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gobuilder.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble (and optionally run) the build described by a config file.
    ///
    /// Emits `go-binary-name`, `go-command` and `go-env` outputs in dry-run
    /// mode, or runs the compiler and emits `go-binary-name` otherwise.
    Build(BuildArgs),
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the YAML build config.
    pub config: PathBuf,

    /// Substitutions for the ldflags template, as `NAME:value, NAME2:value2`.
    #[arg(long, default_value = "")]
    pub envs: String,

    /// Emit the command and environment without running the compiler.
    #[arg(long)]
    pub dry: bool,

    /// Compiler name (looked up on PATH) or path.
    #[arg(long, default_value = "go")]
    pub compiler: String,

    /// Output line format (default: set-output on stdout, key-value for files).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Append outputs to this file instead of writing them to stdout.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
