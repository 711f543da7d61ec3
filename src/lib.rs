//! `foldermap` is a library and command-line tool that maps a project folder
//! into a single plain-text or Markdown summary.
//!
//! The pipeline has four stages, each usable on its own:
//! 1.  **Catalog**: list the extensions present under a folder and find the
//!     candidate files for an extension allow-list, skipping dependency,
//!     cache and build directories ([`list_extensions`], [`discover_files`]).
//! 2.  **Extract**: read each chosen file and pull out function, class and
//!     selector names with textual patterns ([`extract`], [`extract_all`]).
//! 3.  **Render**: produce the summary document with a statistics header and
//!     one section per file type ([`render`]).
//! 4.  **Remember**: persist the per-folder selection, the modification times
//!     of summarized files and the recent-folders list ([`PreferenceStore`]),
//!     so the next run starts from the same choices and flags changed files.
//!
//! # Example: Library Usage
//!
//! ```
//! use foldermap::{discover_files, extract_all, render, CancellationToken, FileTimes, OutputFormat};
//! use std::collections::BTreeSet;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> anyhow::Result<()> {
//! let temp = tempdir()?;
//! fs::create_dir_all(temp.path().join("src"))?;
//! fs::create_dir_all(temp.path().join("node_modules"))?;
//! fs::write(temp.path().join("src/a.py"), "def run():\n    pass\n")?;
//! fs::write(temp.path().join("src/b.css"), ".btn{ color: red }\n")?;
//! fs::write(temp.path().join("node_modules/x.js"), "function x() {}\n")?;
//!
//! let token = CancellationToken::new();
//! let allowed: BTreeSet<String> = [".py", ".css"].iter().map(|s| s.to_string()).collect();
//! let candidates = discover_files(temp.path(), &allowed, &FileTimes::new(), &token)?;
//! assert_eq!(candidates.len(), 2);
//!
//! let paths: Vec<_> = candidates.iter().map(|c| c.absolute_path.clone()).collect();
//! let records = extract_all(&paths, &token)?;
//! let document = render(&records, temp.path(), OutputFormat::Text)?;
//!
//! assert!(document.contains("=== Python Files ==="));
//! assert!(document.contains("=== CSS Files ==="));
//! assert!(!document.contains("x.js"));
//! # Ok(())
//! # }
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod extraction;
pub mod filtering;
pub mod output;
pub mod preferences;
pub mod selection;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ExtensionChoice, FileChoice, OutputDestination, RootSource};
pub use core_types::{CandidateFile, ChangeStatus, FileKind, FileRecord};
pub use discovery::{discover_files, list_extensions};
pub use extraction::{extract, extract_all};
pub use output::{render, render_at, OutputFormat};
pub use preferences::{FileTimes, GlobalPreferences, PreferenceLocation, PreferenceStore};

use crate::config::resolve_root;
use crate::errors::Error;
use anyhow::Result;
use chrono::Local;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a call to [`run`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The recent-folders list was printed.
    ListedRecent,
    /// The available extensions were printed.
    ListedExtensions,
    /// The candidate tree was printed; nothing was written.
    DryRun {
        candidates: usize,
        selected: usize,
    },
    /// A summary was written.
    Summary {
        path: PathBuf,
        files: usize,
        copied_to_clipboard: bool,
    },
}

fn extension_label(ext: &str) -> &str {
    if ext.is_empty() {
        "(none)"
    } else {
        ext
    }
}

fn write_recent_folders(store: &PreferenceStore, out: &mut dyn Write) -> Result<()> {
    let recent = store.recent_folders(constants::MAX_RECENT_FOLDERS);
    if recent.is_empty() {
        writeln!(out, "No recent folders.")?;
    }
    for (i, folder) in recent.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, folder)?;
    }
    Ok(())
}

fn write_extension_list(
    available: &BTreeSet<String>,
    saved: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    for ext in available {
        let marker = if saved.contains(ext) { "*" } else { " " };
        writeln!(out, "{} {}", marker, extension_label(ext))?;
    }
    Ok(())
}

fn choose_files(
    config: &Config,
    root: &Path,
    candidates: &[CandidateFile],
    saved_files: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    Ok(match &config.files {
        FileChoice::Saved => selection::initial_selection(candidates, saved_files),
        FileChoice::All => candidates.iter().map(|c| c.absolute_path.clone()).collect(),
        FileChoice::Explicit(requested) => {
            selection::resolve_explicit_files(root, candidates, requested)?
        }
    })
}

#[cfg(feature = "clipboard")]
fn mirror_to_clipboard(content: &str) -> bool {
    match output::writer::copy_to_clipboard(content) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not copy the summary to the clipboard: {}", e);
            false
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn mirror_to_clipboard(_content: &str) -> bool {
    warn!("Clipboard support is not compiled in; skipping copy");
    false
}

/// Executes one complete run as described by `config`.
///
/// Listings and the dry-run tree are written to `out`. A normal run writes
/// the summary file and, unless `config.save_preferences` is off, records
/// the selection, the modification times of the summarized files and the
/// folder in `store`.
///
/// # Errors
/// Returns (wrapped in `anyhow::Error`) `Error::Interrupted` when the token
/// is cancelled, one of the "nothing to do" variants (see
/// [`Error::is_nothing_to_do`]) when a selection is empty, or any I/O error
/// from writing the summary.
pub fn run(
    config: &Config,
    store: &mut PreferenceStore,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> Result<RunOutcome> {
    if config.list_recent {
        write_recent_folders(store, out)?;
        return Ok(RunOutcome::ListedRecent);
    }

    let root = resolve_root(&config.root, store)?;
    info!("Mapping folder: {}", root.display());

    let available = list_extensions(&root, token)?;
    let (saved_extensions, saved_files) = store.folder_preferences(&root);

    if config.list_extensions {
        write_extension_list(&available, &saved_extensions, out)?;
        return Ok(RunOutcome::ListedExtensions);
    }

    let allowed = match &config.extensions {
        ExtensionChoice::Saved => selection::default_extensions(&saved_extensions, &available),
        ExtensionChoice::All => available.clone(),
        ExtensionChoice::Explicit(selected) => selected.clone(),
    };
    if allowed.is_empty() {
        return Err(Error::NoExtensionsSelected.into());
    }
    debug!("Extension allow-list: {:?}", allowed);

    let candidates = discover_files(&root, &allowed, &store.file_times(&root), token)?;
    let selected = choose_files(config, &root, &candidates, &saved_files)?;
    debug!(
        "{} candidate(s), {} selected",
        candidates.len(),
        selected.len()
    );

    if config.dry_run {
        let selected_set: BTreeSet<PathBuf> = selected.iter().cloned().collect();
        output::write_dry_run_output(
            out,
            &root,
            &candidates,
            &selected_set,
            config.search.as_deref(),
        )?;
        return Ok(RunOutcome::DryRun {
            candidates: candidates.len(),
            selected: selected.len(),
        });
    }

    if selected.is_empty() {
        return Err(Error::NoFilesSelected.into());
    }

    let records = extract_all(&selected, token)?;
    token.ensure_active()?;
    if records.is_empty() {
        warn!("No valid files found for summary creation.");
        return Err(Error::NoFilesFound.into());
    }

    if config.save_preferences {
        let extensions: Vec<String> = allowed.iter().cloned().collect();
        store.save_selection(&root, &extensions, &selected);
        store.set_file_times(&root, &selected);
        store.add_recent_folder(&root);
    }

    let now = Local::now();
    let content = render_at(&records, &root, config.format, &now)?;

    let copied_to_clipboard = config.copy_to_clipboard && mirror_to_clipboard(&content);

    let path = match &config.output_destination {
        OutputDestination::FolderDefault => {
            output::writer::write_summary_file(&root, &content, config.format, &now)?
        }
        OutputDestination::File(path) => {
            output::writer::write_summary_to(path, &content)?;
            path.clone()
        }
    };

    Ok(RunOutcome::Summary {
        path,
        files: records.len(),
        copied_to_clipboard,
    })
}
