// src/preferences/timestamps.rs

use std::fs::{self, Metadata};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Returns the modification time as fractional seconds since the Unix epoch.
///
/// `None` if the platform cannot report it or it predates the epoch.
pub fn modified_seconds(metadata: &Metadata) -> Option<f64> {
    metadata
        .modified()
        .ok()?
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs_f64())
}

/// Reads the modification time of `path`, or `None` if it cannot be read.
pub fn file_modified_seconds(path: &Path) -> Option<f64> {
    fs::metadata(path).ok().as_ref().and_then(modified_seconds)
}

/// The key under which a path is stored in the preference document.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use tempfile::tempdir;

    #[test]
    fn test_modified_seconds_matches_filetime() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.txt");
        fs::write(&path, "x")?;
        set_file_mtime(&path, FileTime::from_unix_time(1_700_000_000, 500_000_000))?;

        let seconds = file_modified_seconds(&path).expect("mtime available");
        assert!((seconds - 1_700_000_000.5).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_missing_file_has_no_timestamp() {
        assert_eq!(
            file_modified_seconds(Path::new("no/such/foldermap_file.txt")),
            None
        );
    }
}
