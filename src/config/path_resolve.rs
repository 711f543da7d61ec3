// src/config/path_resolve.rs

use super::RootSource;
use crate::errors::Error;
use crate::preferences::PreferenceStore;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Resolves a path string to an absolute, canonicalized directory.
pub(crate) fn resolve_input_path(input_path_str: &str) -> Result<PathBuf> {
    let resolved = PathBuf::from(input_path_str)
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: '{}'", input_path_str))?;
    if !resolved.is_dir() {
        return Err(anyhow!(
            "Input path is not a directory: '{}'",
            input_path_str
        ));
    }
    Ok(resolved)
}

/// Resolves the analyzed folder, looking recent folders up in `store`.
///
/// # Errors
/// `Error::NoFolderSelected` when the requested recent entry does not exist.
pub fn resolve_root(source: &RootSource, store: &PreferenceStore) -> Result<PathBuf> {
    match source {
        RootSource::Path(path) => resolve_input_path(path),
        RootSource::Recent(index) => {
            let recent = store.recent_folders(usize::MAX);
            let Some(folder) = index.checked_sub(1).and_then(|i| recent.get(i)) else {
                log::warn!(
                    "Recent folder #{} requested but only {} known",
                    index,
                    recent.len()
                );
                return Err(Error::NoFolderSelected.into());
            };
            resolve_input_path(folder)
        }
    }
}
