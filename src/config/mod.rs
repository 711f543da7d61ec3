//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built from the parsed CLI via `TryFrom<Cli>` (see `builder`).
//! Choices that depend on saved preferences, such as the recent-folder lookup
//! or the default extension list, are kept symbolic here and resolved when
//! the run starts.

use crate::output::OutputFormat;
use crate::preferences::PreferenceLocation;
use std::collections::BTreeSet;
use std::path::PathBuf;

mod builder;
mod parsing;
pub mod path_resolve;
mod validation;

pub use path_resolve::resolve_root;

/// Where the analyzed folder comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// A path given on the command line (or `.`).
    Path(String),
    /// The N-th (1-based) entry of the recent-folders list.
    Recent(usize),
}

/// How the extension allow-list is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionChoice {
    /// Saved extensions for the folder, or all present if none are saved.
    Saved,
    /// Every extension present in the folder.
    All,
    /// Exactly these (normalized) extensions.
    Explicit(BTreeSet<String>),
}

/// How the file selection is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChoice {
    /// Saved files for the folder, or all candidates if none are saved.
    Saved,
    /// Every candidate.
    All,
    /// Exactly these paths (relative to the folder or absolute).
    Explicit(Vec<PathBuf>),
}

/// Where the rendered summary is written.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// `map-<timestamp>.txt|.md` inside the analyzed folder.
    FolderDefault,
    /// The specified file path.
    File(PathBuf),
}

/// Settings for one run, validated from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: RootSource,
    /// Print the recent folders and exit.
    pub list_recent: bool,
    /// Print the available extensions and exit.
    pub list_extensions: bool,
    pub extensions: ExtensionChoice,
    pub files: FileChoice,
    pub format: OutputFormat,
    pub output_destination: OutputDestination,
    /// Mirror the summary to the clipboard.
    pub copy_to_clipboard: bool,
    /// Print the candidate tree instead of writing a summary.
    pub dry_run: bool,
    /// Filter for the dry-run listing.
    pub search: Option<String>,
    /// Persist the selection, file times and recent folder after a summary.
    pub save_preferences: bool,
    /// Overrides the default preference directory.
    pub prefs_dir: Option<PathBuf>,
}

impl Config {
    /// The preference location for this run.
    pub fn preference_location(&self) -> PreferenceLocation {
        match &self.prefs_dir {
            Some(dir) => PreferenceLocation::new(dir),
            None => PreferenceLocation::default_location(),
        }
    }

    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            root: RootSource::Path(".".to_string()),
            list_recent: false,
            list_extensions: false,
            extensions: ExtensionChoice::Saved,
            files: FileChoice::Saved,
            format: OutputFormat::Text,
            output_destination: OutputDestination::FolderDefault,
            copy_to_clipboard: false,
            dry_run: false,
            search: None,
            save_preferences: true,
            prefs_dir: None,
        }
    }
}
