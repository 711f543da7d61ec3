// src/output/writer.rs

//! Persists a rendered summary and optionally mirrors it to the clipboard.

use super::OutputFormat;
use crate::constants::{FILE_NAME_TIMESTAMP_FORMAT, OUTPUT_FILE_PREFIX};
use crate::errors::{io_error_with_path, Result};
use chrono::{DateTime, TimeZone};
use log::info;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of a summary generated at `now`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use foldermap::output::{writer::output_file_name, OutputFormat};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(output_file_name(OutputFormat::Text, &now), "map-20240102030405.txt");
/// assert_eq!(output_file_name(OutputFormat::Markdown, &now), "map-20240102030405.md");
/// ```
pub fn output_file_name<Tz: TimeZone>(format: OutputFormat, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{}{}{}",
        OUTPUT_FILE_PREFIX,
        now.format(FILE_NAME_TIMESTAMP_FORMAT),
        format.file_extension()
    )
}

/// Writes `content` to `path`, replacing any existing file.
pub fn write_summary_to(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, path))?;
    info!("Summary file created at {}", path.display());
    Ok(())
}

/// Writes `content` into `root` under the timestamped default name and
/// returns the full path.
pub fn write_summary_file<Tz: TimeZone>(
    root: &Path,
    content: &str,
    format: OutputFormat,
    now: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: Display,
{
    let path = root.join(output_file_name(format, now));
    write_summary_to(&path, content)?;
    Ok(path)
}

/// Copies `content` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use crate::errors::Error;
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    info!("Summary copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_summary_file_in_root() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();

        let path = write_summary_file(temp.path(), "hello", OutputFormat::Markdown, &now)?;
        assert_eq!(path, temp.path().join("map-20231231235958.md"));
        assert_eq!(fs::read_to_string(&path)?, "hello");
        Ok(())
    }

    #[test]
    fn test_write_summary_to_replaces_existing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("out.txt");
        fs::write(&path, "old content that is longer")?;
        write_summary_to(&path, "new")?;
        assert_eq!(fs::read_to_string(&path)?, "new");
        Ok(())
    }

    #[test]
    fn test_write_summary_to_missing_dir_reports_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no_such_dir").join("out.txt");
        let err = write_summary_to(&path, "x").unwrap_err();
        assert!(err.to_string().contains("no_such_dir"));
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_copy_to_clipboard_error_is_clipboard_variant() {
        // Headless test machines usually have no clipboard; both outcomes are fine.
        if let Err(e) = copy_to_clipboard("clipboard data") {
            assert!(matches!(e, crate::errors::Error::Clipboard(_)));
        }
    }
}
