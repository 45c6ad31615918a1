//! Check result types.
//!
//! Each requirement check produces a [`CheckResult`]; a run accumulates
//! them into a [`RunSummary`].

use serde::Serialize;

use crate::metadata::LookupError;

/// The outcome of looking up a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckResult {
    /// An installed distribution was found.
    Found {
        /// Installed version string.
        version: String,
    },

    /// No installed distribution matches the base name.
    NotFound,

    /// The lookup failed for some other reason.
    #[serde(rename = "error")]
    LookupError {
        /// Underlying error message.
        message: String,
    },
}

impl CheckResult {
    /// Whether the requirement is installed.
    pub fn is_found(&self) -> bool {
        matches!(self, CheckResult::Found { .. })
    }
}

impl From<Result<String, LookupError>> for CheckResult {
    fn from(lookup: Result<String, LookupError>) -> Self {
        match lookup {
            Ok(version) => CheckResult::Found { version },
            Err(LookupError::NotInstalled) => CheckResult::NotFound,
            Err(LookupError::Failed { message }) => CheckResult::LookupError { message },
        }
    }
}

/// A requirement together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedRequirement {
    /// The requirement as written.
    pub requirement: String,
    /// The name that was looked up.
    pub base_name: String,
    /// What the lookup produced.
    #[serde(flatten)]
    pub result: CheckResult,
}

/// Aggregate result of checking a list of requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of requirements found installed.
    pub installed_count: usize,
    /// Raw names of requirements not found or errored, in input order.
    pub missing: Vec<String>,
    /// Every requirement's outcome, in input order.
    pub results: Vec<CheckedRequirement>,
}

impl RunSummary {
    /// Total number of requirements checked.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every requirement was found.
    pub fn all_installed(&self) -> bool {
        self.missing.is_empty()
    }

    /// Fold one outcome into the summary.
    pub fn record(&mut self, checked: CheckedRequirement) {
        if checked.result.is_found() {
            self.installed_count += 1;
        } else {
            self.missing.push(checked.requirement.clone());
        }
        self.results.push(checked);
    }
}
