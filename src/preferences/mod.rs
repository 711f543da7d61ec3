//! Per-folder selection memory that persists between runs.
//!
//! [`PreferenceStore`] wraps the JSON document described in [`types`]. Every
//! mutating call re-reads the document from disk, applies its change and
//! writes the whole document back, so two stores pointed at the same
//! location never clobber each other's unrelated folder entries.

mod storage;
mod timestamps;
pub mod types;

pub use storage::{load_preferences, save_preferences, PreferenceLocation};
pub use timestamps::{file_modified_seconds, modified_seconds, path_key};
pub use types::{FileTimes, GlobalPreferences, PreferenceRecord};

use crate::constants::MAX_RECENT_FOLDERS;
use crate::filtering::is_regular_file;
use log::debug;
use std::path::{Path, PathBuf};

/// Handle on the preference document at a fixed location.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    location: PreferenceLocation,
    prefs: GlobalPreferences,
}

impl PreferenceStore {
    /// Opens the store at `location`, loading (and if needed migrating) the
    /// document.
    pub fn open(location: PreferenceLocation) -> Self {
        let prefs = load_preferences(&location);
        Self { location, prefs }
    }

    pub fn location(&self) -> &PreferenceLocation {
        &self.location
    }

    /// The document as of the last load or mutation.
    pub fn preferences(&self) -> &GlobalPreferences {
        &self.prefs
    }

    /// Reloads the document from disk.
    pub fn reload(&mut self) -> &GlobalPreferences {
        self.prefs = load_preferences(&self.location);
        &self.prefs
    }

    /// Writes the in-memory document as-is.
    pub fn save(&self) {
        save_preferences(&self.location, &self.prefs);
    }

    fn update<F: FnOnce(&mut GlobalPreferences)>(&mut self, change: F) {
        let mut prefs = load_preferences(&self.location);
        change(&mut prefs);
        save_preferences(&self.location, &prefs);
        self.prefs = prefs;
    }

    fn record(&self, root: &Path) -> Option<&PreferenceRecord> {
        self.prefs.folders.get(&path_key(root))
    }

    /// Saved extensions and files for `root`.
    ///
    /// Files that no longer exist as regular files are left out of the
    /// result; the stored list itself is not modified.
    pub fn folder_preferences(&self, root: &Path) -> (Vec<String>, Vec<PathBuf>) {
        let Some(record) = self.record(root) else {
            return (Vec::new(), Vec::new());
        };
        let files: Vec<PathBuf> = record
            .files
            .iter()
            .map(PathBuf::from)
            .filter(|path| is_regular_file(path))
            .collect();
        if files.len() != record.files.len() {
            debug!(
                "Dropped {} stale saved file(s) for {}",
                record.files.len() - files.len(),
                root.display()
            );
        }
        (record.extensions.clone(), files)
    }

    /// Recorded modification times for `root`. Empty if none.
    pub fn file_times(&self, root: &Path) -> FileTimes {
        self.record(root)
            .map(|record| record.file_times.clone())
            .unwrap_or_default()
    }

    /// Records the current modification time of each existing file in
    /// `files`, replacing the previous map for `root`.
    pub fn set_file_times(&mut self, root: &Path, files: &[PathBuf]) {
        let times: FileTimes = files
            .iter()
            .filter_map(|file| file_modified_seconds(file).map(|t| (path_key(file), t)))
            .collect();
        let key = path_key(root);
        self.update(move |prefs| {
            prefs.folders.entry(key).or_default().file_times = times;
        });
    }

    /// Records the extensions and files chosen for `root`. The recorded
    /// modification times are kept.
    pub fn save_selection(&mut self, root: &Path, extensions: &[String], files: &[PathBuf]) {
        let key = path_key(root);
        let extensions = extensions.to_vec();
        let files: Vec<String> = files.iter().map(|f| path_key(f)).collect();
        self.update(move |prefs| {
            let record = prefs.folders.entry(key).or_default();
            record.extensions = extensions;
            record.files = files;
        });
    }

    /// Up to `max` recent folders, newest first.
    pub fn recent_folders(&self, max: usize) -> Vec<String> {
        self.prefs.recent_folders.iter().take(max).cloned().collect()
    }

    /// Moves `folder` to the front of the recent list, keeping at most
    /// ten entries.
    pub fn add_recent_folder(&mut self, folder: &Path) {
        let key = path_key(folder);
        self.update(move |prefs| {
            prefs.recent_folders.retain(|f| *f != key);
            prefs.recent_folders.insert(0, key);
            prefs.recent_folders.truncate(MAX_RECENT_FOLDERS);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use std::fs;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> PreferenceStore {
        PreferenceStore::open(PreferenceLocation::new(dir))
    }

    #[test]
    fn test_recent_folders_move_to_front() {
        let temp = tempdir().unwrap();
        let mut store = store_in(temp.path());
        store.add_recent_folder(Path::new("/a"));
        store.add_recent_folder(Path::new("/b"));
        store.add_recent_folder(Path::new("/a"));
        assert_eq!(store.recent_folders(MAX_RECENT_FOLDERS), vec!["/a", "/b"]);

        let reopened = store_in(temp.path());
        assert_eq!(reopened.recent_folders(MAX_RECENT_FOLDERS), vec!["/a", "/b"]);
    }

    #[test]
    fn test_recent_folders_are_capped() {
        let temp = tempdir().unwrap();
        let mut store = store_in(temp.path());
        for i in 0..15 {
            store.add_recent_folder(Path::new(&format!("/f{}", i)));
        }
        let recent = store.recent_folders(100);
        assert_eq!(recent.len(), MAX_RECENT_FOLDERS);
        assert_eq!(recent[0], "/f14");
        assert_eq!(recent[9], "/f5");
        assert_eq!(store.recent_folders(3), vec!["/f14", "/f13", "/f12"]);
    }

    #[test]
    fn test_folder_preferences_drop_missing_files() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        fs::create_dir(&root).unwrap();
        let kept = root.join("a.py");
        fs::write(&kept, "x").unwrap();
        let gone = root.join("gone.py");

        let mut store = store_in(&temp.path().join("prefs"));
        store.save_selection(&root, &[".py".to_string()], &[kept.clone(), gone]);

        let (extensions, files) = store.folder_preferences(&root);
        assert_eq!(extensions, vec![".py"]);
        assert_eq!(files, vec![kept]);
        // The stored list is untouched.
        assert_eq!(store.preferences().folders[&path_key(&root)].files.len(), 2);
    }

    #[test]
    fn test_unknown_folder_has_no_preferences() {
        let temp = tempdir().unwrap();
        let store = store_in(temp.path());
        let (extensions, files) = store.folder_preferences(Path::new("/nowhere"));
        assert!(extensions.is_empty());
        assert!(files.is_empty());
        assert!(store.file_times(Path::new("/nowhere")).is_empty());
    }

    #[test]
    fn test_set_file_times_replaces_map_and_keeps_selection() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("project");
        fs::create_dir(&root)?;
        let a = root.join("a.py");
        let b = root.join("b.py");
        fs::write(&a, "a")?;
        fs::write(&b, "b")?;
        set_file_mtime(&a, FileTime::from_unix_time(1_600_000_000, 0))?;

        let mut store = store_in(&temp.path().join("prefs"));
        store.save_selection(&root, &[".py".to_string()], &[a.clone()]);
        store.set_file_times(&root, &[a.clone(), b.clone()]);
        store.set_file_times(&root, &[a.clone(), root.join("missing.py")]);

        let times = store.file_times(&root);
        assert_eq!(times.len(), 1);
        assert_eq!(times[&path_key(&a)], 1_600_000_000.0);

        let (extensions, files) = store.folder_preferences(&root);
        assert_eq!(extensions, vec![".py"]);
        assert_eq!(files, vec![a]);
        Ok(())
    }

    #[test]
    fn test_updates_merge_with_other_writers() {
        let temp = tempdir().unwrap();
        let mut first = store_in(temp.path());
        let mut second = store_in(temp.path());

        first.save_selection(Path::new("/one"), &[".py".to_string()], &[]);
        second.save_selection(Path::new("/two"), &[".css".to_string()], &[]);

        let reopened = store_in(temp.path());
        assert!(reopened.preferences().folders.contains_key("/one"));
        assert!(reopened.preferences().folders.contains_key("/two"));
    }
}
