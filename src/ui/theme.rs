//! Visual theme and styling.

use console::Style;

/// pkgcheck's visual theme.
#[derive(Debug, Clone)]
pub struct PkgcheckTheme {
    /// Style for installed packages (green).
    pub success: Style,
    /// Style for lookup errors (yellow).
    pub warning: Style,
    /// Style for missing packages and errors (red).
    pub error: Style,
    /// Style for section headings (red bold).
    pub heading: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the remediation command (yellow bold).
    pub command: Style,
}

impl Default for PkgcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PkgcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            heading: Style::new().red().bold(),
            highlight: Style::new().bold(),
            command: Style::new().yellow().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            heading: Style::new(),
            highlight: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a failure message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("🐍 {}", self.highlight.apply_to(title))
    }

    /// Format a section heading (no icon).
    pub fn format_heading(&self, title: &str) -> String {
        format!("{}", self.heading.apply_to(title))
    }

    /// Format a copy-pasteable command.
    pub fn format_command(&self, command: &str) -> String {
        format!("{}", self.command.apply_to(command))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
