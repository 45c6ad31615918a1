//! Check command implementation.
//!
//! The `pkgcheck check` command (also the default) looks up every package,
//! reports each as it goes, and ends with the summary and remediation.

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::metadata::{SearchPath, SearchPathSource, SitePackagesIndex};
use crate::requirements::report::{
    header_line, item_line, ACTION_REQUIRED, ALL_INSTALLED, INSTALL_HINT,
};
use crate::requirements::{
    check_all, summarize, CheckResult, CheckedRequirement, JsonReport, Report,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::settings::RunSettings;

/// The check command implementation.
pub struct CheckCommand {
    settings: RunSettings,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: RunSettings, args: CheckArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// The installer prefix for the remediation command.
    pub fn installer(&self) -> &str {
        self.args
            .installer
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or(&self.settings.config.installer)
    }

    /// Run the check against a specific search path.
    pub fn execute_with(
        &self,
        search: &SearchPath,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let requirements = self.settings.config.requirements();
        let index = SitePackagesIndex::from_search_path(search);

        tracing::debug!(
            "Checking {} requirements across {} directories",
            requirements.len(),
            index.dirs().len()
        );

        let report = match self.args.format {
            OutputFormat::Human => {
                show_search_path(ui, search);
                ui.show_header(&header_line(requirements.len()));

                let shows_found = ui.output_mode().shows_found();
                let summary = check_all(&requirements, &index, |checked| {
                    show_item(ui, checked, shows_found)
                });
                let report = summarize(&summary, self.installer());
                show_report(ui, &report);
                report
            }
            OutputFormat::Json => {
                let summary = check_all(&requirements, &index, |_| {});
                let report = summarize(&summary, self.installer());
                let json = serde_json::to_string_pretty(&JsonReport::new(&summary, &report))?;
                ui.message(&json);
                report
            }
        };

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let search = self.settings.search_path();
        self.execute_with(&search, ui)
    }
}

fn show_search_path(ui: &mut dyn UserInterface, search: &SearchPath) {
    if let Some(reason) = search.fallback_reason() {
        let fallback = match search.source() {
            SearchPathSource::VirtualEnv(root) => {
                format!("searching virtualenv at {}", root.display())
            }
            _ => "no site-packages directories to search".to_string(),
        };
        ui.warning(&format!("{}; {}", reason, fallback));
    }

    if ui.output_mode().shows_search_path() {
        ui.message("Searching:");
        for dir in search.dirs() {
            ui.message(&format!("  {}", dir.display()));
        }
        ui.message("");
    }
}

fn show_item(ui: &mut dyn UserInterface, checked: &CheckedRequirement, shows_found: bool) {
    let line = item_line(checked);
    match checked.result {
        CheckResult::Found { .. } => {
            if shows_found {
                ui.success(&line);
            }
        }
        CheckResult::NotFound => ui.failure(&line),
        CheckResult::LookupError { .. } => ui.warning(&line),
    }
}

fn show_report(ui: &mut dyn UserInterface, report: &Report) {
    ui.message("");
    for line in report.summary_lines() {
        ui.message(&line);
    }
    ui.message("");

    match &report.remediation {
        Some(command) => {
            ui.show_heading(ACTION_REQUIRED);
            ui.message(INSTALL_HINT);
            ui.show_command(command);
        }
        None => ui.success(ALL_INSTALLED),
    }
}
