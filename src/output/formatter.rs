// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use byte_unit::{Byte, UnitType};
use std::path::{Path, PathBuf};

/// Formats a path for display in headings and listings.
///
/// Path separators are always shown as `/`.
///
/// # Examples
/// ```
/// use foldermap::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/main.py")), "src/main.py");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// `path` relative to `root`, or `path` itself when it is not under `root`.
pub fn relative_to_root(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Human-readable size using binary units, one decimal place.
pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.1}", adjusted)
}
