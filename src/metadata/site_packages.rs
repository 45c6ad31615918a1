//! Filesystem distribution index.
//!
//! Installed distributions leave a metadata directory next to their code:
//! `name-version.dist-info/METADATA` for wheels, `name-version.egg-info`
//! (a directory holding `PKG-INFO`, or a bare file) for legacy installs.
//! The version is read from the `Version:` header of that file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::normalize::normalize_name;
use super::{DistributionIndex, LookupError, SearchPath};

/// Kind of metadata entry found in a site directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// `*.dist-info` directory with a `METADATA` file.
    DistInfo,
    /// `*.egg-info` directory with `PKG-INFO`, or an `*.egg-info` file.
    EggInfo,
}

/// A metadata entry name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry<'a> {
    /// Distribution name as written in the entry (escaped).
    pub name: &'a str,
    /// Entry kind.
    pub kind: MetadataKind,
}

/// Split a directory entry name like `python_dotenv-1.0.1.dist-info`.
///
/// Returns `None` for anything that isn't a metadata entry.
pub fn parse_metadata_entry(file_name: &str) -> Option<MetadataEntry<'_>> {
    let (stem, kind) = if let Some(stem) = file_name.strip_suffix(".dist-info") {
        (stem, MetadataKind::DistInfo)
    } else if let Some(stem) = file_name.strip_suffix(".egg-info") {
        (stem, MetadataKind::EggInfo)
    } else {
        return None;
    };

    let name = stem.split('-').next().unwrap_or(stem);
    if name.is_empty() {
        return None;
    }
    Some(MetadataEntry { name, kind })
}

/// Extract the `Version` header from core metadata text.
///
/// Headers end at the first blank line; the description body that follows
/// is never scanned.
pub fn parse_version_header(content: &str) -> Option<String> {
    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case("version") {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Distribution index over a list of site directories.
#[derive(Debug, Clone)]
pub struct SitePackagesIndex {
    dirs: Vec<PathBuf>,
}

impl SitePackagesIndex {
    /// Create an index over these directories, searched in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Create an index from a discovered search path.
    pub fn from_search_path(search: &SearchPath) -> Self {
        Self::new(search.dirs().to_vec())
    }

    /// Directories searched, in order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Version of `wanted` in `dir`, if `dir` has a matching entry.
    fn find_in_dir(
        &self,
        dir: &Path,
        entries: &[String],
        wanted: &str,
    ) -> Option<Result<String, LookupError>> {
        let (file_name, entry) = entries.iter().find_map(|file_name| {
            parse_metadata_entry(file_name)
                .filter(|entry| normalize_name(entry.name) == wanted)
                .map(|entry| (file_name, entry))
        })?;

        let path = dir.join(file_name);
        tracing::debug!("Matched {} for '{}'", path.display(), wanted);
        Some(read_version(&path, entry.kind))
    }
}

impl DistributionIndex for SitePackagesIndex {
    fn version(&self, base_name: &str) -> Result<String, LookupError> {
        let wanted = normalize_name(base_name);
        if wanted.is_empty() {
            return Err(LookupError::NotInstalled);
        }

        // A directory that cannot be listed only matters if no later one
        // holds the distribution.
        let mut listing_error = None;
        for dir in &self.dirs {
            let entries = match list_dir(dir) {
                Ok(Some(entries)) => entries,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("{}", e);
                    listing_error.get_or_insert(e);
                    continue;
                }
            };
            if let Some(found) = self.find_in_dir(dir, &entries, &wanted) {
                return found;
            }
        }

        Err(listing_error.unwrap_or(LookupError::NotInstalled))
    }
}

/// Sorted entry names of `dir`, or `None` when it doesn't exist.
fn list_dir(dir: &Path) -> Result<Option<Vec<String>>, LookupError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Skipping missing directory {}", dir.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(LookupError::failed(format!(
                "cannot list {}: {}",
                dir.display(),
                e
            )));
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(Some(names))
}

fn read_version(entry_path: &Path, kind: MetadataKind) -> Result<String, LookupError> {
    let file = match kind {
        MetadataKind::DistInfo => entry_path.join("METADATA"),
        MetadataKind::EggInfo if entry_path.is_dir() => entry_path.join("PKG-INFO"),
        MetadataKind::EggInfo => entry_path.to_path_buf(),
    };

    let content = fs::read_to_string(&file)
        .map_err(|e| LookupError::failed(format!("cannot read {}: {}", file.display(), e)))?;

    parse_version_header(&content).ok_or_else(|| {
        LookupError::failed(format!("{} has no Version field", file.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_dist_info(site: &Path, dir_name: &str, metadata: &str) {
        let dist = site.join(dir_name);
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("METADATA"), metadata).unwrap();
    }

    #[test]
    fn parse_entry_dist_info() {
        let entry = parse_metadata_entry("python_dotenv-1.0.1.dist-info").unwrap();
        assert_eq!(entry.name, "python_dotenv");
        assert_eq!(entry.kind, MetadataKind::DistInfo);
    }

    #[test]
    fn parse_entry_egg_info() {
        let entry = parse_metadata_entry("psycopg2_binary-2.9.9-py3.12.egg-info").unwrap();
        assert_eq!(entry.name, "psycopg2_binary");
        assert_eq!(entry.kind, MetadataKind::EggInfo);
    }

    #[test]
    fn parse_entry_ignores_packages() {
        assert!(parse_metadata_entry("requests").is_none());
        assert!(parse_metadata_entry("__pycache__").is_none());
        assert!(parse_metadata_entry("-1.0.dist-info").is_none());
    }

    #[test]
    fn version_header_is_found() {
        let content = "Metadata-Version: 2.1\nName: httpx\nVersion: 0.27.0\n\nVersion: 9.9\n";
        assert_eq!(parse_version_header(content), Some("0.27.0".to_string()));
    }

    #[test]
    fn version_header_in_body_is_ignored() {
        let content = "Metadata-Version: 2.1\nName: httpx\n\nVersion: 9.9\n";
        assert_eq!(parse_version_header(content), None);
    }

    #[test]
    fn finds_installed_version() {
        let temp = TempDir::new().unwrap();
        write_dist_info(
            temp.path(),
            "python_dotenv-1.0.1.dist-info",
            "Name: python-dotenv\nVersion: 1.0.1\n",
        );

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        assert_eq!(index.version("python-dotenv"), Ok("1.0.1".to_string()));
        assert_eq!(index.version("Python.Dotenv"), Ok("1.0.1".to_string()));
    }

    #[test]
    fn missing_distribution_is_not_installed() {
        let temp = TempDir::new().unwrap();
        write_dist_info(temp.path(), "httpx-0.27.0.dist-info", "Version: 0.27.0\n");

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        assert_eq!(index.version("requests"), Err(LookupError::NotInstalled));
    }

    #[test]
    fn prefix_names_do_not_match() {
        let temp = TempDir::new().unwrap();
        write_dist_info(temp.path(), "langgraph_cli-0.1.0.dist-info", "Version: 0.1.0\n");

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        assert_eq!(index.version("langgraph"), Err(LookupError::NotInstalled));
    }

    #[test]
    fn first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_dist_info(first.path(), "openai-1.30.0.dist-info", "Version: 1.30.0\n");
        write_dist_info(second.path(), "openai-0.28.0.dist-info", "Version: 0.28.0\n");

        let index = SitePackagesIndex::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(index.version("openai"), Ok("1.30.0".to_string()));
    }

    #[test]
    fn missing_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        write_dist_info(temp.path(), "loguru-0.7.2.dist-info", "Version: 0.7.2\n");

        let index = SitePackagesIndex::new(vec![
            temp.path().join("does-not-exist"),
            temp.path().to_path_buf(),
        ]);
        assert_eq!(index.version("loguru"), Ok("0.7.2".to_string()));
    }

    #[test]
    fn unlistable_directory_does_not_hide_later_ones() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("not-a-dir");
        fs::write(&not_a_dir, b"").unwrap();
        let site = temp.path().join("site");
        write_dist_info(&site, "alpha-1.2.dist-info", "Version: 1.2\n");

        let index = SitePackagesIndex::new(vec![not_a_dir, site]);
        assert_eq!(index.version("alpha"), Ok("1.2".to_string()));
    }

    #[test]
    fn unlistable_directory_is_reported_when_nothing_matches() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("not-a-dir");
        fs::write(&not_a_dir, b"").unwrap();
        let site = temp.path().join("site");
        fs::create_dir_all(&site).unwrap();

        let index = SitePackagesIndex::new(vec![not_a_dir, site]);
        let err = index.version("alpha").unwrap_err();
        assert!(err.to_string().contains("cannot list"));
    }

    #[test]
    fn egg_info_directory_uses_pkg_info() {
        let temp = TempDir::new().unwrap();
        let egg = temp.path().join("tenacity-8.2.3-py3.11.egg-info");
        fs::create_dir_all(&egg).unwrap();
        fs::write(egg.join("PKG-INFO"), "Name: tenacity\nVersion: 8.2.3\n").unwrap();

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        assert_eq!(index.version("tenacity"), Ok("8.2.3".to_string()));
    }

    #[test]
    fn egg_info_file_is_read_directly() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("nbformat-5.10.4.egg-info"),
            "Name: nbformat\nVersion: 5.10.4\n",
        )
        .unwrap();

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        assert_eq!(index.version("nbformat"), Ok("5.10.4".to_string()));
    }

    #[test]
    fn unreadable_metadata_is_a_lookup_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("gamma-1.0.dist-info")).unwrap();

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        let err = index.version("gamma").unwrap_err();
        assert!(matches!(err, LookupError::Failed { .. }));
        assert!(err.to_string().contains("METADATA"));
    }

    #[test]
    fn metadata_without_version_is_a_lookup_error() {
        let temp = TempDir::new().unwrap();
        write_dist_info(temp.path(), "gamma-1.0.dist-info", "Name: gamma\n");

        let index = SitePackagesIndex::new(vec![temp.path().to_path_buf()]);
        let err = index.version("gamma").unwrap_err();
        assert!(err.to_string().contains("no Version field"));
    }

    #[test]
    fn empty_name_is_not_installed() {
        let index = SitePackagesIndex::new(Vec::new());
        assert_eq!(index.version(""), Err(LookupError::NotInstalled));
    }
}
