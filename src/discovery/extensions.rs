// src/discovery/extensions.rs

use super::walker::walk_files;
use crate::cancellation::CancellationToken;
use crate::errors::Result;
use crate::filtering::file_extension;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Lists the distinct lowercase extensions of all files under `root`.
///
/// Ignored directories are pruned and ignored files skipped. Extensionless
/// files contribute the empty string, which sorts first.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
///
/// # Examples
///
/// ```
/// use foldermap::{list_extensions, CancellationToken};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("a.py"), "")?;
/// fs::write(temp.path().join("b.PY"), "")?;
/// fs::write(temp.path().join("c"), "")?;
///
/// let exts = list_extensions(temp.path(), &CancellationToken::new())?;
/// assert_eq!(exts.into_iter().collect::<Vec<_>>(), vec!["", ".py"]);
/// # Ok(())
/// # }
/// ```
pub fn list_extensions(root: &Path, token: &CancellationToken) -> Result<BTreeSet<String>> {
    let mut extensions = BTreeSet::new();
    walk_files(root, token, |file| {
        extensions.insert(file_extension(&file.path));
    })?;
    debug!(
        "Found {} distinct extensions under {}",
        extensions.len(),
        root.display()
    );
    Ok(extensions)
}
