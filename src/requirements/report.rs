//! Report assembly.
//!
//! Turns a [`RunSummary`] into the lines a user reads and the exit code the
//! shell sees. Styling is left to the UI; everything here is plain text.

use serde::Serialize;

use crate::requirements::status::{CheckResult, CheckedRequirement, RunSummary};

/// Installer invocation used when none is configured.
pub const DEFAULT_INSTALLER: &str = "pip install";

/// Width the requirement column is padded to in per-item lines.
const NAME_WIDTH: usize = 25;

/// Horizontal rule framing the summary block.
pub const SEPARATOR: &str = "========================================";

/// Heading of the remediation block.
pub const ACTION_REQUIRED: &str = "Action Required:";

/// Line introducing the remediation command.
pub const INSTALL_HINT: &str = "To install all missing packages, copy and run this command:";

/// Closing line when nothing is missing.
pub const ALL_INSTALLED: &str = "All packages are installed!";

/// Exit code when every requirement is installed.
pub const EXIT_OK: i32 = 0;

/// Exit code when anything is missing or errored.
pub const EXIT_MISSING: i32 = 1;

/// Summary of a run, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of requirements checked.
    pub total: usize,
    /// Number found installed.
    pub installed_count: usize,
    /// Number missing or errored.
    pub missing_count: usize,
    /// Install-all command, when anything is missing.
    pub remediation: Option<String>,
    /// Process exit code.
    pub exit_code: i32,
}

impl Report {
    /// Whether the run needs no action.
    pub fn is_success(&self) -> bool {
        self.exit_code == EXIT_OK
    }

    /// Lines of the summary block.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            SEPARATOR.to_string(),
            "Check Complete".to_string(),
            format!("  Installed: {}", self.installed_count),
            format!("  Missing:   {}", self.missing_count),
            SEPARATOR.to_string(),
        ]
    }
}

/// Build the report for a finished run.
pub fn summarize(summary: &RunSummary, installer: &str) -> Report {
    let remediation = if summary.missing.is_empty() {
        None
    } else {
        Some(remediation_command(installer, &summary.missing))
    };

    Report {
        total: summary.total(),
        installed_count: summary.installed_count,
        missing_count: summary.missing.len(),
        exit_code: if remediation.is_some() {
            EXIT_MISSING
        } else {
            EXIT_OK
        },
        remediation,
    }
}

/// Build `installer "a" "b[x]"` from missing requirements, in order.
pub fn remediation_command(installer: &str, missing: &[String]) -> String {
    let quoted: Vec<String> = missing.iter().map(|m| format!("\"{}\"", m)).collect();
    format!("{} {}", installer.trim(), quoted.join(" "))
}

/// Header line announcing the run.
pub fn header_line(total: usize) -> String {
    let noun = if total == 1 { "package" } else { "packages" };
    format!("Checking {} Python {}...", total, noun)
}

/// Per-requirement status line, without the status icon.
pub fn item_line(checked: &CheckedRequirement) -> String {
    let name = format!("{:<width$}", checked.requirement, width = NAME_WIDTH);
    match &checked.result {
        CheckResult::Found { version } => {
            format!("{} (Found: {}=={})", name, checked.base_name, version)
        }
        CheckResult::NotFound => {
            format!("{} (Package '{}' not found)", name, checked.base_name)
        }
        CheckResult::LookupError { message } => {
            format!(
                "{} (Error checking '{}': {})",
                name, checked.base_name, message
            )
        }
    }
}

/// Machine-readable form of a run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Number of requirements checked.
    pub total: usize,
    /// Number found installed.
    pub installed_count: usize,
    /// Raw names missing or errored, in input order.
    pub missing: &'a [String],
    /// Every requirement's outcome, in input order.
    pub results: &'a [CheckedRequirement],
    /// Install-all command, `null` when nothing is missing.
    pub remediation: Option<&'a str>,
    /// Process exit code.
    pub exit_code: i32,
}

impl<'a> JsonReport<'a> {
    /// Combine a summary and its report.
    pub fn new(summary: &'a RunSummary, report: &'a Report) -> Self {
        Self {
            total: report.total,
            installed_count: summary.installed_count,
            missing: &summary.missing,
            results: &summary.results,
            remediation: report.remediation.as_deref(),
            exit_code: report.exit_code,
        }
    }
}
