// src/filtering/file_type.rs

use std::fs;
use std::path::Path;

/// Checks if the path currently exists and is a regular file.
///
/// Symlinks are followed. Any metadata error counts as "not a file".
#[inline]
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|md| md.is_file()).unwrap_or(false)
}
