// src/filtering/extension.rs

use super::build_files::is_build_file;
use std::collections::BTreeSet;
use std::path::Path;

/// Returns the lowercase extension of `path` including the leading dot, or an
/// empty string when the file has none.
///
/// Leading dots of hidden files do not count as an extension separator.
///
/// # Examples
///
/// ```
/// use foldermap::filtering::file_extension;
/// use std::path::Path;
///
/// assert_eq!(file_extension(Path::new("src/App.JSX")), ".jsx");
/// assert_eq!(file_extension(Path::new("Makefile")), "");
/// assert_eq!(file_extension(Path::new(".bashrc")), "");
/// assert_eq!(file_extension(Path::new("archive.tar.gz")), ".gz");
/// ```
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Checks if a path passes the extension allow-list.
///
/// A file passes when its lowercase extension is in `allowed`, or when it has
/// no extension and its name is a recognized container build file (these are
/// offered even if the empty extension was not chosen).
///
/// # Examples
///
/// ```
/// use foldermap::filtering::passes_extension_filter;
/// use std::collections::BTreeSet;
/// use std::path::Path;
///
/// let allowed: BTreeSet<String> = [".py".to_string()].into_iter().collect();
/// assert!(passes_extension_filter(Path::new("a.PY"), &allowed));
/// assert!(passes_extension_filter(Path::new("Dockerfile"), &allowed));
/// assert!(!passes_extension_filter(Path::new("README"), &allowed));
/// assert!(!passes_extension_filter(Path::new("a.js"), &allowed));
/// ```
pub fn passes_extension_filter(path: &Path, allowed: &BTreeSet<String>) -> bool {
    let extension = file_extension(path);
    if allowed.contains(&extension) {
        return true;
    }
    extension.is_empty() && is_build_file(path)
}
