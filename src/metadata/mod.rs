//! Installed distribution metadata.
//!
//! This module answers one question: which version of a distribution is
//! installed? The checker only sees the [`DistributionIndex`] trait, so tests
//! can substitute an in-memory index for the filesystem one.
//!
//! # Modules
//!
//! - [`normalize`] - Distribution name normalization
//! - [`search_path`] - Discovery of the directories to search
//! - [`site_packages`] - Filesystem index over `*.dist-info` / `*.egg-info`

pub mod normalize;
pub mod search_path;
pub mod site_packages;

use std::collections::HashMap;
use thiserror::Error;

pub use normalize::normalize_name;
pub use search_path::{SearchPath, SearchPathSource};
pub use site_packages::SitePackagesIndex;

/// Why a version could not be returned for a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No installed distribution matches the name.
    #[error("not installed")]
    NotInstalled,

    /// A distribution was found or searched for, but reading it failed.
    #[error("{message}")]
    Failed { message: String },
}

impl LookupError {
    /// Build a [`LookupError::Failed`] from anything printable.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// A read-only source of installed distribution versions.
pub trait DistributionIndex {
    /// Return the installed version of `base_name`.
    fn version(&self, base_name: &str) -> Result<String, LookupError>;
}

/// Index backed by a fixed map, keyed by normalized name.
///
/// Used where no real environment should be touched.
#[derive(Debug, Clone, Default)]
pub struct StaticIndex {
    entries: HashMap<String, Result<String, LookupError>>,
}

impl StaticIndex {
    /// Create an empty index where every lookup is [`LookupError::NotInstalled`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an installed distribution.
    pub fn with_version(mut self, name: &str, version: &str) -> Self {
        self.entries
            .insert(normalize_name(name), Ok(version.to_string()));
        self
    }

    /// Record a distribution whose lookup fails.
    pub fn with_error(mut self, name: &str, message: &str) -> Self {
        self.entries
            .insert(normalize_name(name), Err(LookupError::failed(message)));
        self
    }
}

impl DistributionIndex for StaticIndex {
    fn version(&self, base_name: &str) -> Result<String, LookupError> {
        self.entries
            .get(&normalize_name(base_name))
            .cloned()
            .unwrap_or(Err(LookupError::NotInstalled))
    }
}
