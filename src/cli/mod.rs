//! Command-line interface for pkgcheck.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ListArgs, OutputFormat};
pub use commands::{Command, CommandDispatcher, CommandResult, RunSettings, EXIT_USAGE};
