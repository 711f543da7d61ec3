// src/preferences/storage.rs

//! Reads and writes the preference document.
//!
//! Loading never fails: a missing or unreadable current-format file falls
//! back to the legacy file (which is migrated on success), and then to empty
//! preferences. Saving writes a temp file next to the target and renames it
//! over the old document, so concurrent writers can only lose updates
//! (last writer wins), never produce a torn file.

use super::types::GlobalPreferences;
use crate::constants::{LEGACY_PREFERENCES_FILE_NAME, PREFERENCES_FILE_NAME};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The directory holding the current and legacy preference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceLocation {
    dir: PathBuf,
}

impl PreferenceLocation {
    /// Uses `dir` for both preference files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform configuration directory for `foldermap`.
    ///
    /// Falls back to `.foldermap` in the working directory when no home
    /// directory can be determined.
    pub fn default_location() -> Self {
        match ProjectDirs::from("", "", "foldermap") {
            Some(dirs) => Self::new(dirs.config_dir()),
            None => {
                warn!("Could not determine a configuration directory; using ./.foldermap");
                Self::new(".foldermap")
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the current-format document.
    pub fn current_file(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE_NAME)
    }

    /// Path of the legacy document.
    pub fn legacy_file(&self) -> PathBuf {
        self.dir.join(LEGACY_PREFERENCES_FILE_NAME)
    }
}

fn read_document(path: &Path) -> Result<GlobalPreferences> {
    let text = fs::read_to_string(path)
        .map_err(|e| crate::errors::io_error_with_path(e, path))
        .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse preferences: {}", path.display()))
}

fn write_document(location: &PreferenceLocation, prefs: &GlobalPreferences) -> Result<()> {
    let target = location.current_file();
    fs::create_dir_all(location.dir())
        .with_context(|| format!("Failed to create {}", location.dir().display()))?;

    let mut temp = NamedTempFile::new_in(location.dir())
        .with_context(|| "Failed to create temporary preferences file")?;
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(temp.as_file_mut(), formatter);
        prefs
            .serialize(&mut serializer)
            .with_context(|| "Failed to serialize preferences")?;
    }
    temp.as_file_mut().write_all(b"\n")?;
    temp.as_file_mut().sync_all()?;
    temp.persist(&target)
        .map_err(|e| anyhow!("Failed to replace {}: {}", target.display(), e.error))?;
    Ok(())
}

/// Loads the preference document, falling back to the legacy file and then
/// to empty preferences. Failures are logged as warnings.
pub fn load_preferences(location: &PreferenceLocation) -> GlobalPreferences {
    let current = location.current_file();
    if current.exists() {
        match read_document(&current) {
            Ok(prefs) => {
                debug!("Loaded preferences from {}", current.display());
                return prefs;
            }
            Err(e) => warn!("Error loading preferences: {:#}", e),
        }
    }

    let legacy = location.legacy_file();
    if legacy.exists() {
        match read_document(&legacy) {
            Ok(prefs) => {
                save_preferences(location, &prefs);
                info!("Migrated legacy preferences from {}", legacy.display());
                return prefs;
            }
            Err(e) => warn!("Error loading legacy preferences: {:#}", e),
        }
    }

    GlobalPreferences::default()
}

/// Writes the full preference document to the current-format location.
/// Failures are logged, not returned.
pub fn save_preferences(location: &PreferenceLocation, prefs: &GlobalPreferences) {
    match write_document(location, prefs) {
        Ok(()) => debug!("Preferences saved to {}", location.current_file().display()),
        Err(e) => log::error!("Error saving preferences: {:#}", e),
    }
}
