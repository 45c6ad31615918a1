//! Configuration loading and validation.
//!
//! # Modules
//!
//! - [`schema`] - The `.pkgcheck.yml` structure
//! - [`loader`] - File discovery and parsing
//! - [`validator`] - Value checks applied after parsing

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, CONFIG_FILE_NAME};
pub use schema::{PackageSource, PkgcheckConfig, DEFAULT_PYTHON};
pub use validator::validate;
