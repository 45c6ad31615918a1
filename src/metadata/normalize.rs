//! Distribution name normalization.
//!
//! Installers write `Foo.Bar`, `foo_bar` and `foo-bar` interchangeably, and
//! the `*.dist-info` directory name escapes `-` as `_`. Names compare equal
//! when lowercased with every run of `-`, `_` and `.` collapsed to one `-`.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of name separators.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("SEPARATOR_REGEX must compile"));

/// Normalize a distribution name for comparison.
pub fn normalize_name(name: &str) -> String {
    SEPARATOR_REGEX
        .replace_all(name.trim(), "-")
        .to_lowercase()
}
