// src/cli.rs

use crate::output::OutputFormat;
use crate::selection::Preset;
use clap::Parser;

/// Map a project folder into a single text or Markdown summary.
///
/// foldermap walks a folder (skipping dependency, cache and build directories),
/// lets you pick extensions and files, and writes a report with per-type
/// statistics, extracted function and class names, and the full content of
/// every chosen file. Your choices are remembered per folder, and files that
/// changed since the last summary are flagged.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Folder to summarize. Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    // --- Folder Selection ---
    /// Use the N-th most recently summarized folder (1 = newest) instead of PATH.
    #[arg(short = 'R', long, value_name = "N", conflicts_with = "path")]
    pub recent: Option<usize>,

    /// Print the recently summarized folders and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list_recent: bool,

    // --- Extension Selection ---
    /// Include files with these extensions (case-insensitive, repeatable). Use "none" for files without one.
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Add a named group of extensions (repeatable).
    #[arg(short = 'P', long, value_enum, value_name = "PRESET", num_args = 1..)]
    pub preset: Option<Vec<Preset>>,

    /// Include every extension present in the folder, ignoring saved choices.
    #[arg(short = 'A', long, action = clap::ArgAction::SetTrue, conflicts_with_all = ["extensions", "preset"])]
    pub all_ext: bool,

    /// Print the extensions present in the folder (saved ones marked) and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list_extensions: bool,

    // --- File Selection ---
    /// Summarize only these files (relative to the folder or absolute, repeatable).
    #[arg(short = 'f', long = "file", value_name = "FILE", num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Summarize every candidate file, ignoring the saved selection.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue, conflicts_with = "files")]
    pub all_files: bool,

    // --- Output ---
    /// Layout of the summary document.
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the summary to this file instead of map-<timestamp> in the folder.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    #[cfg(feature = "clipboard")]
    /// Also copy the summary to the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub paste: bool,

    // --- Execution Control ---
    /// Print the candidate tree with check states, sizes and change status. Writes nothing.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// With --dry-run, only show files whose path contains TEXT (case-insensitive).
    #[arg(short = 's', long, value_name = "TEXT", requires = "dry_run")]
    pub search: Option<String>,

    /// Do not update the saved preferences.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_save: bool,

    /// Directory holding the preference file (defaults to the user config directory).
    #[arg(long, value_name = "DIR")]
    pub prefs_dir: Option<String>,
}
