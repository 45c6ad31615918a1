//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pkgcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("httpx (Found: httpx==0.27.0)");
//! ui.failure("loguru (Package 'loguru' not found)");
//!
//! assert_eq!(ui.successes().len(), 1);
//! assert_eq!(ui.failures().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PkgcheckTheme};

/// Trait for user-facing output.
///
/// Report lines go to stdout; [`UserInterface::error`] is for problems that
/// stop the run and goes to stderr.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a failure line (part of the report).
    fn failure(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error that stopped the run.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section heading within the report.
    fn show_heading(&mut self, title: &str);

    /// Show a command the user should copy and run.
    fn show_command(&mut self, command: &str);
}
