//! Settings shared by the commands that inspect an environment.
//!
//! Command-line flags win over the config file, which wins over built-in
//! defaults.

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::PkgcheckConfig;
use crate::metadata::SearchPath;

/// Config plus command-line overrides.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// The loaded configuration.
    pub config: PkgcheckConfig,
    /// Interpreter to probe.
    pub python: String,
    /// Explicit search directories; empty means ask the interpreter.
    pub site_packages: Vec<PathBuf>,
}

impl RunSettings {
    /// Merge CLI flags over a loaded config.
    pub fn resolve(cli: &Cli, config: PkgcheckConfig) -> Self {
        let python = cli
            .python
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| config.python().to_string());

        let site_packages = if cli.site_packages.is_empty() {
            config.site_packages.clone()
        } else {
            cli.site_packages.clone()
        };

        Self {
            config,
            python,
            site_packages,
        }
    }

    /// Where to look for installed distributions.
    pub fn search_path(&self) -> SearchPath {
        if self.site_packages.is_empty() {
            SearchPath::discover(&self.python)
        } else {
            SearchPath::explicit(self.site_packages.clone())
        }
    }
}
