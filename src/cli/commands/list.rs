//! List command implementation.
//!
//! The `pkgcheck list` command shows which packages a check would look up,
//! without touching the environment.

use crate::cli::args::ListArgs;
use crate::config::{PackageSource, PkgcheckConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: PkgcheckConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: PkgcheckConfig, args: ListArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requirements = self.config.requirements();

        if self.args.raw {
            for req in &requirements {
                ui.message(req.raw_name());
            }
            return Ok(CommandResult::success());
        }

        let source = match self.config.package_source() {
            PackageSource::BuiltIn => "built-in list",
            PackageSource::Config => "config",
        };
        ui.show_header(&format!(
            "{} packages (from {})",
            requirements.len(),
            source
        ));

        for req in &requirements {
            let extras = req.extras();
            if extras.is_empty() {
                ui.message(&format!("  {}", req.base_name()));
            } else {
                ui.message(&format!(
                    "  {} [extras: {}]",
                    req.base_name(),
                    extras.join(", ")
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
