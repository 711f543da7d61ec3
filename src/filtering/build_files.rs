// src/filtering/build_files.rs

use std::path::Path;

// Container build/infrastructure file names (case-insensitive check)
const BUILD_FILE_NAMES: &[&str] = &[
    "dockerfile",
    "dockerfile.dev",
    "docker-compose.yml",
    "docker-compose.yaml",
];

/// Checks if a path names a recognized container build file.
///
/// The check is a case-insensitive exact match on the file name and ignores
/// the extension, so `docker-compose.yml` qualifies even though `.yml` is an
/// extension.
pub fn is_build_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name_str| {
            let lower_name = name_str.to_lowercase();
            BUILD_FILE_NAMES.iter().any(|&build| lower_name == build)
        })
        .unwrap_or(false)
}
