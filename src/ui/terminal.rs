//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PkgcheckTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PkgcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PkgcheckTheme::new()
        } else {
            PkgcheckTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "  {}", self.theme.format_success(msg)).ok();
    }

    fn failure(&mut self, msg: &str) {
        writeln!(self.out, "  {}", self.theme.format_error(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "  {}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "{}\n", self.theme.format_header(title)).ok();
    }

    fn show_heading(&mut self, title: &str) {
        writeln!(self.out, "{}", self.theme.format_heading(title)).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.out, "\n{}\n", self.theme.format_command(command)).ok();
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
