//! Turns saved preferences and command-line choices into the extension
//! allow-list and the file selection for a run.

use crate::core_types::CandidateFile;
use crate::errors::{Error, Result};
use clap::ValueEnum;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Check state of a node in the selection tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
}

impl CheckState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Marker used in listings.
    pub fn marker(self) -> &'static str {
        match self {
            CheckState::Checked => "[x]",
            CheckState::Unchecked => "[ ]",
        }
    }
}

/// A folder is checked iff it has children and all of them are checked.
///
/// # Examples
/// ```
/// use foldermap::selection::{folder_check_state, CheckState};
///
/// assert_eq!(folder_check_state(&[CheckState::Checked, CheckState::Checked]), CheckState::Checked);
/// assert_eq!(folder_check_state(&[CheckState::Checked, CheckState::Unchecked]), CheckState::Unchecked);
/// assert_eq!(folder_check_state(&[]), CheckState::Unchecked);
/// ```
pub fn folder_check_state(children: &[CheckState]) -> CheckState {
    CheckState::from_bool(
        !children.is_empty() && children.iter().all(|c| *c == CheckState::Checked),
    )
}

/// Named groups of extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Code,
    Web,
    Config,
    Docs,
}

impl Preset {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Preset::Code => &[
                ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".cpp", ".c", ".h",
            ],
            Preset::Web => &[".html", ".htm", ".css", ".js", ".jsx"],
            Preset::Config => &[".json", ".yaml", ".yml", ".toml", ".env", ".ini"],
            Preset::Docs => &[".md", ".txt", ".rst", ".pdf"],
        }
    }
}

/// Extensions used when none were given explicitly: the saved ones that are
/// still present, or every available extension if nothing was saved.
pub fn default_extensions(saved: &[String], available: &BTreeSet<String>) -> BTreeSet<String> {
    if saved.is_empty() {
        return available.clone();
    }
    saved
        .iter()
        .filter(|ext| available.contains(*ext))
        .cloned()
        .collect()
}

/// Files selected when none were given explicitly: candidates in the saved
/// list, or every candidate if none of the saved files is a candidate.
pub fn initial_selection(candidates: &[CandidateFile], saved_files: &[PathBuf]) -> Vec<PathBuf> {
    let saved: BTreeSet<&Path> = saved_files.iter().map(PathBuf::as_path).collect();
    let kept: Vec<PathBuf> = candidates
        .iter()
        .filter(|c| saved.contains(c.absolute_path.as_path()))
        .map(|c| c.absolute_path.clone())
        .collect();
    if !kept.is_empty() {
        return kept;
    }
    candidates.iter().map(|c| c.absolute_path.clone()).collect()
}

/// Maps user-supplied file paths (relative to `root` or absolute) onto the
/// candidate list, in candidate order.
///
/// # Errors
/// Returns `Error::Config` naming the first path that is not a candidate.
pub fn resolve_explicit_files(
    root: &Path,
    candidates: &[CandidateFile],
    requested: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let mut wanted = BTreeSet::new();
    for path in requested {
        let joined = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        // Candidates are not symlink-resolved, so try the path as given first.
        let is_candidate = |p: &Path| candidates.iter().any(|c| c.absolute_path == p);
        let resolved = if is_candidate(joined.as_path()) {
            joined
        } else {
            match joined.canonicalize() {
                Ok(canonical) if is_candidate(canonical.as_path()) => canonical,
                _ => {
                    return Err(Error::Config(format!(
                        "'{}' is not a candidate file under {} (check --ext and the built-in ignore rules)",
                        path.display(),
                        root.display()
                    )))
                }
            }
        };
        wanted.insert(resolved);
    }
    Ok(candidates
        .iter()
        .filter(|c| wanted.contains(&c.absolute_path))
        .map(|c| c.absolute_path.clone())
        .collect())
}
