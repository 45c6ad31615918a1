//! Configuration file discovery and loading.
//!
//! A project may carry a `.pkgcheck.yml` next to where the tool runs. When
//! it doesn't, the built-in defaults apply. An explicitly requested file
//! must exist.

use crate::config::schema::PkgcheckConfig;
use crate::config::validator::validate;
use crate::error::{PkgcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for in the project root.
pub const CONFIG_FILE_NAME: &str = ".pkgcheck.yml";

/// Find the project config at `<root>/.pkgcheck.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and validate a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if values are unusable.
pub fn load_config_file(path: &Path) -> Result<PkgcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PkgcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PkgcheckError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PkgcheckConfig> {
    if content.trim().is_empty() {
        return Ok(PkgcheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PkgcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file. Otherwise uses
/// the project config when present, falling back to defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PkgcheckConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!(
                "No {} in {}, using defaults",
                CONFIG_FILE_NAME,
                project_root.display()
            );
            Ok(PkgcheckConfig::default())
        }
    }
}
