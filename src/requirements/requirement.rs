//! Package requirement identifiers.
//!
//! A requirement is written the way an installer accepts it: a distribution
//! name, optionally followed by bracketed extras (`fastapi[standard]`).
//! Extras matter to the installer but not to the lookup, so the name is
//! split into the raw string kept for display and the base name used to
//! find installed metadata.

use std::fmt;

/// A single entry from the list of packages to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequirement {
    raw_name: String,
}

impl PackageRequirement {
    /// Create a requirement from its identifier as written.
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
        }
    }

    /// The identifier exactly as given, extras included.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// The distribution name used for lookup.
    pub fn base_name(&self) -> &str {
        base_name(&self.raw_name)
    }

    /// Extras named inside the brackets, if any.
    ///
    /// `uvicorn[standard, dev]` yields `["standard", "dev"]`. An unterminated
    /// bracket still yields whatever follows it.
    pub fn extras(&self) -> Vec<&str> {
        let Some((_, rest)) = self.raw_name.split_once('[') else {
            return Vec::new();
        };
        let inner = rest.split(']').next().unwrap_or(rest);
        inner
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect()
    }
}

impl fmt::Display for PackageRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_name)
    }
}

impl From<&str> for PackageRequirement {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PackageRequirement {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Truncate an identifier at its first `[`.
pub fn base_name(raw: &str) -> &str {
    match raw.find('[') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Build requirements from a list of identifiers, keeping order.
pub fn parse_requirements<I, S>(names: I) -> Vec<PackageRequirement>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(PackageRequirement::new).collect()
}
