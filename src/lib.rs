//! pkgcheck - Check that a list of Python packages is installed.
//!
//! pkgcheck looks up each package of a fixed list in the local Python
//! environment, reports what it finds, and prints one command that installs
//! everything missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.pkgcheck.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`metadata`] - Installed distribution lookup
//! - [`requirements`] - Package list, checker and report
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pkgcheck::metadata::StaticIndex;
//! use pkgcheck::requirements::{check_all, parse_requirements, summarize};
//!
//! let index = StaticIndex::new().with_version("alpha", "1.2");
//! let summary = check_all(&parse_requirements(["alpha"]), &index, |_| {});
//! assert_eq!(summarize(&summary, "pip install").exit_code, 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod requirements;
pub mod ui;

pub use error::{PkgcheckError, Result};
