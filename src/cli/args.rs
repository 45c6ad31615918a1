//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// pkgcheck - Check that Python packages are installed.
#[derive(Debug, Parser)]
#[command(name = "pkgcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pkgcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Python interpreter to ask for its search path
    #[arg(long, global = true, env = "PKGCHECK_PYTHON")]
    pub python: Option<String>,

    /// Search this site-packages directory instead of asking Python (repeatable)
    #[arg(long = "site-packages", value_name = "DIR", global = true)]
    pub site_packages: Vec<PathBuf>,

    /// Also show the directories searched
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show problems and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every package is installed (default if no command specified)
    Check(CheckArgs),

    /// List the packages that would be checked
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Report format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable report
    #[default]
    Human,
    /// A single JSON document
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Installer invocation for the remediation command (e.g. "uv pip install")
    #[arg(long)]
    pub installer: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print only the raw requirement strings, one per line
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
