//! Package requirements and availability checking.
//!
//! This module holds the list of packages to check, the checker that looks
//! each one up, and the report built from the results.
//!
//! # Modules
//!
//! - [`requirement`] - Requirement identifiers and extras handling
//! - [`defaults`] - The built-in package list
//! - [`checker`] - Per-item lookup with fault isolation
//! - [`status`] - Check result and run summary types
//! - [`report`] - Summary text, remediation command and exit code
//!
//! # Example
//!
//! ```
//! use pkgcheck::metadata::StaticIndex;
//! use pkgcheck::requirements::{check_all, parse_requirements, summarize};
//!
//! let index = StaticIndex::new().with_version("alpha", "1.2");
//! let reqs = parse_requirements(["alpha", "beta[x]"]);
//!
//! let summary = check_all(&reqs, &index, |_| {});
//! let report = summarize(&summary, "pip install");
//!
//! assert_eq!(summary.missing, vec!["beta[x]"]);
//! assert_eq!(report.exit_code, 1);
//! assert_eq!(report.remediation.as_deref(), Some("pip install \"beta[x]\""));
//! ```

pub mod checker;
pub mod defaults;
pub mod report;
pub mod requirement;
pub mod status;

pub use checker::{check_all, check_one};
pub use defaults::{default_requirements, DEFAULT_PACKAGES};
pub use report::{summarize, JsonReport, Report, DEFAULT_INSTALLER};
pub use requirement::{base_name, parse_requirements, PackageRequirement};
pub use status::{CheckResult, CheckedRequirement, RunSummary};
