// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn foldermap_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("foldermap"))
}

/// The binary with its preference store redirected to `prefs`.
#[allow(dead_code)]
pub fn foldermap_with_prefs(prefs: &Path) -> Command {
    let mut cmd = foldermap_cmd();
    cmd.arg("--prefs-dir").arg(prefs);
    cmd
}

#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// Summary files (`map-*`) written directly inside `dir`.
#[allow(dead_code)]
pub fn map_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with("map-") {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}
