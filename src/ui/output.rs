//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show where packages are searched for.
    Verbose,
    /// Show every package line and the summary.
    #[default]
    Normal,
    /// Show only problems and the summary.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows lines for installed packages.
    pub fn shows_found(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode lists the directories searched.
    pub fn shows_search_path(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
