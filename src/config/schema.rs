//! Configuration schema definitions.
//!
//! Maps the `.pkgcheck.yml` file format:
//!
//! ```yaml
//! packages:
//!   - fastapi[standard]
//!   - httpx
//! installer: uv pip install
//! python: .venv/bin/python
//! site_packages:
//!   - .venv/lib/python3.12/site-packages
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::requirements::{default_requirements, parse_requirements, PackageRequirement};
use crate::requirements::DEFAULT_INSTALLER;

/// Interpreter probed when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgcheckConfig {
    /// Packages to check; replaces the built-in list when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,

    /// Installer invocation prefixed to the remediation command.
    pub installer: String,

    /// Interpreter to ask for its search path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Directories to search instead of asking the interpreter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site_packages: Vec<PathBuf>,
}

impl Default for PkgcheckConfig {
    fn default() -> Self {
        Self {
            packages: None,
            installer: DEFAULT_INSTALLER.to_string(),
            python: None,
            site_packages: Vec::new(),
        }
    }
}

/// Where the requirement list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSource {
    /// The built-in list.
    BuiltIn,
    /// The `packages` key of a config file.
    Config,
}

impl PkgcheckConfig {
    /// The requirements to check, in order.
    pub fn requirements(&self) -> Vec<PackageRequirement> {
        match &self.packages {
            Some(packages) => parse_requirements(packages.iter().map(|p| p.trim().to_string())),
            None => default_requirements(),
        }
    }

    /// Where [`Self::requirements`] draws from.
    pub fn package_source(&self) -> PackageSource {
        if self.packages.is_some() {
            PackageSource::Config
        } else {
            PackageSource::BuiltIn
        }
    }

    /// The interpreter to probe.
    pub fn python(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }
}
