//! Discovery of the directories that hold installed distributions.
//!
//! The authoritative answer comes from the interpreter itself: `sys.path`
//! already accounts for virtualenvs, user site directories and `.pth`
//! files. When the interpreter can't be run the active virtualenv is the
//! next best guess.
//!
//! # Example
//!
//! ```no_run
//! use pkgcheck::metadata::SearchPath;
//!
//! let search = SearchPath::discover("python3");
//! for dir in search.dirs() {
//!     println!("searching {}", dir.display());
//! }
//! ```

use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PkgcheckError, Result};

/// Script that prints one `sys.path` entry per line.
const SYS_PATH_SCRIPT: &str = "import sys; print('\\n'.join(sys.path))";

/// Where a [`SearchPath`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPathSource {
    /// Directories given on the command line or in config.
    Explicit,
    /// `sys.path` reported by this interpreter.
    Interpreter(String),
    /// Site directories under `$VIRTUAL_ENV`.
    VirtualEnv(PathBuf),
    /// Nothing usable was found.
    Empty,
}

/// Ordered list of directories to search for distribution metadata.
#[derive(Debug, Clone)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    source: SearchPathSource,
    fallback_reason: Option<String>,
}

impl SearchPath {
    /// Use exactly these directories, in this order.
    pub fn explicit(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            source: SearchPathSource::Explicit,
            fallback_reason: None,
        }
    }

    /// Ask `interpreter` for its `sys.path`, falling back to `$VIRTUAL_ENV`.
    pub fn discover(interpreter: &str) -> Self {
        Self::discover_with(interpreter, query_interpreter, |key: &str| {
            std::env::var(key)
        })
    }

    /// Discovery with injectable interpreter query and env lookup.
    pub fn discover_with<Q, F>(interpreter: &str, query: Q, env_fn: F) -> Self
    where
        Q: Fn(&str) -> Result<Vec<PathBuf>>,
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        match query(interpreter) {
            Ok(dirs) => {
                tracing::debug!(
                    "Interpreter '{}' reported {} search directories",
                    interpreter,
                    dirs.len()
                );
                Self {
                    dirs,
                    source: SearchPathSource::Interpreter(interpreter.to_string()),
                    fallback_reason: None,
                }
            }
            Err(e) => {
                tracing::warn!("{}", e);
                let reason = e.to_string();
                match env_fn("VIRTUAL_ENV") {
                    Ok(venv) if !venv.is_empty() => {
                        let root = PathBuf::from(venv);
                        Self {
                            dirs: virtualenv_site_dirs(&root),
                            source: SearchPathSource::VirtualEnv(root),
                            fallback_reason: Some(reason),
                        }
                    }
                    _ => Self {
                        dirs: Vec::new(),
                        source: SearchPathSource::Empty,
                        fallback_reason: Some(reason),
                    },
                }
            }
        }
    }

    /// Directories to search, in priority order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// How the directories were found.
    pub fn source(&self) -> &SearchPathSource {
        &self.source
    }

    /// Why discovery had to fall back, if it did.
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }
}

/// Run `interpreter` and return the existing directories on its `sys.path`.
pub fn query_interpreter(interpreter: &str) -> Result<Vec<PathBuf>> {
    let stdout =
        run_interpreter(interpreter).map_err(|e| PkgcheckError::InterpreterFailed {
            interpreter: interpreter.to_string(),
            message: format!("{:#}", e),
        })?;
    Ok(parse_sys_path(&stdout))
}

fn run_interpreter(interpreter: &str) -> anyhow::Result<String> {
    let output = Command::new(interpreter)
        .args(["-c", SYS_PATH_SCRIPT])
        .output()
        .with_context(|| format!("failed to start {}", interpreter))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("exited with {}: {}", output.status, stderr.trim());
    }

    String::from_utf8(output.stdout).context("sys.path output is not valid UTF-8")
}

/// Turn `sys.path` output into existing directories.
///
/// A blank entry is the interpreter's working directory, which it shares
/// with us. Zip archives and missing paths are dropped.
pub fn parse_sys_path(output: &str) -> Vec<PathBuf> {
    output
        .lines()
        .map(str::trim)
        .map(|line| if line.is_empty() { "." } else { line })
        .map(PathBuf::from)
        .filter(|path| path.is_dir())
        .collect()
}

/// Site-packages directories of a virtualenv rooted at `root`.
///
/// Covers the POSIX layout (`lib/pythonX.Y/site-packages`) and the Windows
/// one (`Lib/site-packages`).
pub fn virtualenv_site_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(entries) = std::fs::read_dir(root.join("lib")) {
        let mut versions: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("python"))
            .map(|e| e.path().join("site-packages"))
            .filter(|p| p.is_dir())
            .collect();
        versions.sort();
        dirs.extend(versions);
    }

    let windows = root.join("Lib").join("site-packages");
    if windows.is_dir() && !dirs.contains(&windows) {
        dirs.push(windows);
    }

    dirs
}
