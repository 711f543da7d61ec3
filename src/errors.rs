//! Defines application-specific error types.
//!
//! Most failures inside the pipeline are transient and are degraded to a
//! default value where they happen (a single unreadable file, a broken
//! preference file). The variants here are the ones that reach the caller.

use thiserror::Error;

/// Errors returned by the `foldermap` library.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error without path context (e.g. writing to a buffer).
    #[error(transparent)]
    Stream(#[from] std::io::Error),

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error related to clipboard operations.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// No folder could be determined for the run.
    #[error("No folder was selected.")]
    NoFolderSelected,

    /// The extension allow-list ended up empty.
    #[error("No file extensions selected.")]
    NoExtensionsSelected,

    /// The file selection ended up empty.
    #[error("No files selected.")]
    NoFilesSelected,

    /// Every selected file disappeared before it could be summarized.
    #[error("No valid files were selected to create a summary.")]
    NoFilesFound,
}

impl Error {
    /// Returns `true` for the "nothing to do" outcomes, which are normal exits
    /// rather than failures.
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(
            self,
            Error::NoFolderSelected
                | Error::NoExtensionsSelected
                | Error::NoFilesSelected
                | Error::NoFilesFound
        )
    }
}

/// A specialized `Result` type for `foldermap` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
