// src/extraction/reader.rs

use crate::errors::io_error_with_path;
use crate::filtering::is_likely_text_from_buffer;
use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads a file that must be valid UTF-8.
pub(super) fn read_utf8(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| io_error_with_path(e, path))
        .with_context(|| format!("Failed to read file content: {}", path.display()))?;
    Ok(normalize_newlines(content))
}

/// Reads a file of unknown type, replacing invalid UTF-8 sequences.
///
/// Fails if the content looks binary.
pub(super) fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| io_error_with_path(e, path))
        .with_context(|| format!("Failed to read file content: {}", path.display()))?;
    if !is_likely_text_from_buffer(&bytes) {
        bail!("{} looks like a binary file", path.display());
    }
    Ok(normalize_newlines(
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}
