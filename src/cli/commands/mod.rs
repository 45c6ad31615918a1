//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads config
//! once and routes CLI subcommands to their implementations. Running with
//! no subcommand is the same as `pkgcheck check`.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod settings;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_USAGE};
pub use settings::RunSettings;
