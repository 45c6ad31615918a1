//! Configuration validation.

use crate::config::schema::PkgcheckConfig;
use crate::error::{PkgcheckError, Result};
use crate::requirements::base_name;

/// Reject configurations that can't produce a meaningful run.
pub fn validate(config: &PkgcheckConfig) -> Result<()> {
    if config.installer.trim().is_empty() {
        return Err(PkgcheckError::ConfigValidationError {
            message: "installer must not be empty".to_string(),
        });
    }

    if let Some(python) = &config.python {
        if python.trim().is_empty() {
            return Err(PkgcheckError::ConfigValidationError {
                message: "python must not be empty".to_string(),
            });
        }
    }

    for (idx, package) in config.packages.iter().flatten().enumerate() {
        let package = package.trim();
        if package.is_empty() {
            return Err(PkgcheckError::ConfigValidationError {
                message: format!("packages[{}] is empty", idx),
            });
        }
        if base_name(package).trim().is_empty() {
            return Err(PkgcheckError::ConfigValidationError {
                message: format!("packages[{}] '{}' has no package name", idx, package),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_packages(packages: &[&str]) -> PkgcheckConfig {
        PkgcheckConfig {
            packages: Some(packages.iter().map(|p| p.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PkgcheckConfig::default()).is_ok());
    }

    #[test]
    fn empty_installer_is_rejected() {
        let config = PkgcheckConfig {
            installer: "  ".to_string(),
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("installer"));
    }

    #[test]
    fn empty_python_is_rejected() {
        let config = PkgcheckConfig {
            python: Some(String::new()),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn blank_package_is_rejected() {
        let err = validate(&with_packages(&["httpx", " "])).unwrap_err();
        assert!(err.to_string().contains("packages[1]"));
    }

    #[test]
    fn extras_only_package_is_rejected() {
        let err = validate(&with_packages(&["[standard]"])).unwrap_err();
        assert!(err.to_string().contains("has no package name"));
    }

    #[test]
    fn empty_package_list_is_valid() {
        assert!(validate(&with_packages(&[])).is_ok());
    }
}
