//! Handles the extraction stage of the `foldermap` pipeline.
//!
//! Each selected file is classified into a [`FileKind`], read, and turned into
//! a [`FileRecord`] carrying its content, line count and (for Python,
//! JavaScript and CSS) the symbol names found by [`symbols`]. A file that
//! cannot be read yields a placeholder record instead of an error, so one bad
//! file never aborts the batch.

use crate::cancellation::CancellationToken;
use crate::core_types::{FileKind, FileRecord};
use crate::errors::Result;
use crate::filtering::{file_extension, is_build_file};
use log::{debug, error, warn};
use std::path::{Path, PathBuf};

mod reader;
pub mod symbols;

use symbols::{PythonSymbols, ScriptSymbols, StylesheetSymbols, SymbolExtractor};

/// Decides the kind of `path` from its name alone.
///
/// Build file names take priority over the extension.
///
/// # Examples
///
/// ```
/// use foldermap::extraction::classify_kind;
/// use foldermap::core_types::FileKind;
/// use std::path::Path;
///
/// assert_eq!(classify_kind(Path::new("app/main.py")), FileKind::Python);
/// assert_eq!(classify_kind(Path::new("ui/App.TSX")), FileKind::JavaScript);
/// assert_eq!(classify_kind(Path::new("Dockerfile")), FileKind::Docker);
/// assert_eq!(classify_kind(Path::new("docker-compose.yml")), FileKind::Docker);
/// assert_eq!(classify_kind(Path::new("README.md")), FileKind::Other);
/// ```
pub fn classify_kind(path: &Path) -> FileKind {
    if is_build_file(path) {
        return FileKind::Docker;
    }
    match file_extension(path).as_str() {
        ".py" => FileKind::Python,
        ".js" | ".jsx" | ".ts" | ".tsx" => FileKind::JavaScript,
        ".css" => FileKind::Css,
        ".html" | ".htm" => FileKind::Html,
        _ => FileKind::Other,
    }
}

fn extractor_for(kind: FileKind) -> Option<&'static dyn SymbolExtractor> {
    match kind {
        FileKind::Python => Some(&PythonSymbols),
        FileKind::JavaScript => Some(&ScriptSymbols),
        FileKind::Css => Some(&StylesheetSymbols),
        FileKind::Html | FileKind::Docker | FileKind::Other => None,
    }
}

/// Builds the record for one file. Never fails.
///
/// Typed kinds must be valid UTF-8; `Other` files are read lossily but
/// rejected when they look binary. On any failure the record holds the
/// placeholder content, zero lines and no symbols.
pub fn extract(path: &Path) -> FileRecord {
    let kind = classify_kind(path);
    let read = match kind {
        FileKind::Other => reader::read_lossy(path),
        _ => reader::read_utf8(path),
    };

    let content = match read {
        Ok(content) => content,
        Err(e) => {
            error!("Error extracting {} details: {:#}", kind, e);
            return FileRecord::unreadable(path.to_path_buf(), kind);
        }
    };

    let mut record = FileRecord::plain(path.to_path_buf(), kind, content);
    if let Some(extractor) = extractor_for(kind) {
        let found = extractor.extract(&record.content);
        debug!(
            "{} found {} function(s), {} class(es), {} id(s) in {}",
            extractor.name(),
            found.functions.len(),
            found.classes.len(),
            found.ids.len(),
            path.display()
        );
        record.functions = found.functions;
        record.classes = found.classes;
        record.ids = found.ids;
    }
    record
}

/// Extracts every path in order, skipping those that are no longer regular
/// files.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled between files.
pub fn extract_all(paths: &[PathBuf], token: &CancellationToken) -> Result<Vec<FileRecord>> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        token.ensure_active()?;
        if !path.exists() {
            warn!("Skipping missing file: {}", path.display());
            continue;
        }
        if path.is_dir() {
            warn!("Skipping directory: {}", path.display());
            continue;
        }
        debug!("Extracting file: {}", path.display());
        records.push(extract(path));
    }
    Ok(records)
}
