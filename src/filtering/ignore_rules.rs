// src/filtering/ignore_rules.rs

use glob::Pattern;
use log::warn;
use once_cell::sync::Lazy;
use std::path::{Component, Path};

// Development, build and cache directories that are never descended into.
const IGNORED_DIR_NAMES: &[&str] = &[
    // --- VCS ---
    ".git",
    // --- Python ---
    "__pycache__",
    ".pytest_cache",
    "venv",
    "env",
    ".env",
    ".venv",
    "virtualenv",
    ".virtualenv",
    ".tox",
    "*.egg-info", // Literal entry; real egg-info dirs are caught by the suffix check
    ".eggs",
    ".coverage",
    "htmlcov",
    ".hypothesis",
    ".mypy_cache",
    ".ruff_cache",
    // --- Build output ---
    "dist",
    "build",
    // --- Web tooling ---
    "node_modules",
    ".sass-cache",
    "bower_components",
    ".next",
    ".nuxt",
    ".output",
    ".vercel",
    ".netlify",
];

const EGG_INFO_SUFFIX: &str = ".egg-info";

// Compiled artifacts, OS/editor junk and runtime files (glob syntax).
const IGNORED_FILE_GLOBS: &[&str] = &[
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "__pycache__",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.class",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    "*.swp",
    "*.swo",
    "*~",
    "*.bak",
    "*.tmp",
    "*.log",
    "*.pid",
    "*.seed",
    "*.pid.lock",
];

static IGNORED_FILE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    IGNORED_FILE_GLOBS
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Invalid built-in ignore glob '{}': {}", glob, e);
                None
            }
        })
        .collect()
});

/// Checks if a single path segment names a directory that must never be walked.
///
/// # Examples
///
/// ```
/// use foldermap::filtering::is_ignored_dir_name;
///
/// assert!(is_ignored_dir_name("node_modules"));
/// assert!(is_ignored_dir_name("mypkg.egg-info"));
/// assert!(!is_ignored_dir_name("src"));
/// ```
pub fn is_ignored_dir_name(name: &str) -> bool {
    IGNORED_DIR_NAMES.contains(&name) || name.ends_with(EGG_INFO_SUFFIX)
}

/// Checks if a file name matches one of the built-in ignore globs.
///
/// Matching is case-sensitive on the raw name.
pub fn is_ignored_file_name(name: &str) -> bool {
    IGNORED_FILE_PATTERNS
        .iter()
        .any(|pattern| pattern.matches(name))
}

/// Decides whether `path` should be excluded from a walk rooted at `root`.
///
/// Returns `true` if any segment of the path relative to `root` is an ignored
/// directory name (or ends with `.egg-info`), or if the final segment matches
/// one of the ignore globs. If `path` is not below `root`, its full set of
/// segments is checked instead.
///
/// # Examples
///
/// ```
/// use foldermap::filtering::should_ignore;
/// use std::path::Path;
///
/// let root = Path::new("/repo");
/// assert!(should_ignore(Path::new("/repo/node_modules/pkg/index.js"), root));
/// assert!(should_ignore(Path::new("/repo/src/cache.pyc"), root));
/// assert!(!should_ignore(Path::new("/repo/src/main.py"), root));
/// ```
pub fn should_ignore(path: &Path, root: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let ignored_segment = relative.components().any(|component| match component {
        Component::Normal(segment) => segment.to_str().is_some_and(is_ignored_dir_name),
        _ => false,
    });
    if ignored_segment {
        return true;
    }

    relative
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_ignored_file_name)
}
