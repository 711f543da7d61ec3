// src/discovery/catalog.rs

use super::walker::walk_files;
use crate::cancellation::CancellationToken;
use crate::core_types::{CandidateFile, ChangeStatus};
use crate::errors::Result;
use crate::filtering::passes_extension_filter;
use crate::preferences::{modified_seconds, path_key, FileTimes};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::instrument;

/// Classifies a file by comparing its current modification time to the one
/// recorded the last time it was part of a summary.
///
/// # Examples
///
/// ```
/// use foldermap::discovery::classify_change;
/// use foldermap::core_types::ChangeStatus;
///
/// assert_eq!(classify_change(None, Some(10.0)), ChangeStatus::New);
/// assert_eq!(classify_change(Some(5.0), Some(10.0)), ChangeStatus::Modified);
/// assert_eq!(classify_change(Some(10.0), Some(10.0)), ChangeStatus::Unchanged);
/// assert_eq!(classify_change(Some(12.0), Some(10.0)), ChangeStatus::Unchanged);
/// ```
pub fn classify_change(previous: Option<f64>, current: Option<f64>) -> ChangeStatus {
    match (previous, current) {
        (None, _) => ChangeStatus::New,
        (Some(prev), Some(cur)) if prev < cur => ChangeStatus::Modified,
        _ => ChangeStatus::Unchanged,
    }
}

/// Finds the candidate files under `root` for the given extension allow-list.
///
/// Ignored directories are pruned, ignored files skipped, and each remaining
/// file must pass [`passes_extension_filter`]. Every candidate is tagged
/// New / Modified / Unchanged against `previous_times`. The result is sorted
/// by relative path.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn discover_files(
    root: &Path,
    allowed_extensions: &BTreeSet<String>,
    previous_times: &FileTimes,
    token: &CancellationToken,
) -> Result<Vec<CandidateFile>> {
    let mut candidates = Vec::new();

    walk_files(root, token, |file| {
        if !passes_extension_filter(&file.path, allowed_extensions) {
            return;
        }

        let relative_path = match file.path.strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(err) => {
                warn!(
                    "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
                    root.display(),
                    file.path.display(),
                    err
                );
                file.path.clone()
            }
        };

        let previous = previous_times.get(&path_key(&file.path)).copied();
        let status = classify_change(previous, modified_seconds(&file.metadata));

        candidates.push(CandidateFile {
            absolute_path: file.path,
            relative_path,
            size: file.metadata.len(),
            status,
        });
    })?;

    candidates.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Discovery complete. Candidates: {}", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_discover_filters_by_extension_and_ignore_rules() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("src"))?;
        fs::create_dir_all(root.join("node_modules"))?;
        fs::write(root.join("src/a.py"), "def run():\n    pass\n")?;
        fs::write(root.join("src/b.css"), ".btn{}")?;
        fs::write(root.join("src/c.js"), "")?;
        fs::write(root.join("node_modules/x.js"), "")?;

        let found = discover_files(
            root,
            &exts(&[".py", ".css"]),
            &FileTimes::new(),
            &CancellationToken::new(),
        )?;
        let rel: Vec<PathBuf> = found.iter().map(|c| c.relative_path.clone()).collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("src/a.py"), PathBuf::from("src/b.css")]
        );
        assert!(found.iter().all(|c| c.status == ChangeStatus::New));
        Ok(())
    }

    #[test]
    fn test_discover_includes_extensionless_dockerfile() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("Dockerfile"), "FROM alpine\n")?;
        fs::write(root.join("README"), "hello\n")?;

        let found = discover_files(
            root,
            &exts(&[".py"]),
            &FileTimes::new(),
            &CancellationToken::new(),
        )?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path, PathBuf::from("Dockerfile"));
        Ok(())
    }

    #[test]
    fn test_discover_change_status() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        let modified = root.join("modified.py");
        let unchanged = root.join("unchanged.py");
        let fresh = root.join("fresh.py");
        for path in [&modified, &unchanged, &fresh] {
            fs::write(path, "x = 1\n")?;
            set_file_mtime(path, FileTime::from_unix_time(2_000, 0))?;
        }

        let mut previous = FileTimes::new();
        previous.insert(path_key(&modified), 1_000.0);
        previous.insert(path_key(&unchanged), 2_000.0);

        let found = discover_files(
            root,
            &exts(&[".py"]),
            &previous,
            &CancellationToken::new(),
        )?;
        let status_of = |name: &str| {
            found
                .iter()
                .find(|c| c.relative_path == Path::new(name))
                .map(|c| c.status)
        };
        assert_eq!(status_of("modified.py"), Some(ChangeStatus::Modified));
        assert_eq!(status_of("unchanged.py"), Some(ChangeStatus::Unchanged));
        assert_eq!(status_of("fresh.py"), Some(ChangeStatus::New));
        Ok(())
    }
}
