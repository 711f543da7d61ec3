//! The in-memory shape of the preference document.
//!
//! On disk the document is a JSON object mapping absolute folder paths to
//! [`PreferenceRecord`]s, plus the reserved `_recent_folders` key:
//!
//! ```json
//! {
//!     "_recent_folders": ["/home/me/project"],
//!     "/home/me/project": {
//!         "extensions": [".py", ".css"],
//!         "files": ["/home/me/project/src/a.py"],
//!         "file_times": { "/home/me/project/src/a.py": 1700000000.25 }
//!     }
//! }
//! ```

use crate::constants::RECENT_FOLDERS_KEY;
use log::warn;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Modification times keyed by absolute path, in seconds since the epoch.
pub type FileTimes = BTreeMap<String, f64>;

/// Preferences remembered for one folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Extensions chosen the last time (with leading dot, `""` for none).
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Absolute paths of the files chosen the last time.
    #[serde(default)]
    pub files: Vec<String>,
    /// Modification times recorded when the files were last summarized.
    #[serde(default)]
    pub file_times: FileTimes,
}

/// The whole preference document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalPreferences {
    /// Most-recently-used folders, newest first, without duplicates.
    #[serde(rename = "_recent_folders")]
    pub recent_folders: Vec<String>,
    /// Per-folder records keyed by absolute folder path.
    #[serde(flatten)]
    pub folders: BTreeMap<String, PreferenceRecord>,
}

impl GlobalPreferences {
    /// Builds preferences from a parsed JSON document.
    ///
    /// The document must be an object. Folder entries that are not valid
    /// records are reset to an empty record; a malformed recent-folders list
    /// is dropped. Both cases log a warning.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let object: Map<String, Value> = match value {
            Value::Object(object) => object,
            other => {
                return Err(format!(
                    "expected a JSON object at the top level, found {}",
                    json_type_name(&other)
                ))
            }
        };

        let mut prefs = GlobalPreferences::default();
        for (key, entry) in object {
            if key == RECENT_FOLDERS_KEY {
                prefs.recent_folders = parse_recent_folders(entry);
                continue;
            }
            let record = serde_json::from_value::<PreferenceRecord>(entry).unwrap_or_else(|e| {
                warn!("Invalid preferences for folder {}, resetting: {}", key, e);
                PreferenceRecord::default()
            });
            prefs.folders.insert(key, record);
        }
        Ok(prefs)
    }
}

impl<'de> Deserialize<'de> for GlobalPreferences {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        GlobalPreferences::from_value(value).map_err(de::Error::custom)
    }
}

fn parse_recent_folders(entry: Value) -> Vec<String> {
    match entry {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        other => {
            warn!(
                "Ignoring malformed recent folders list ({})",
                json_type_name(&other)
            );
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_document() {
        let value = json!({
            "_recent_folders": ["/a", "/b"],
            "/a": {
                "extensions": [".py"],
                "files": ["/a/x.py"],
                "file_times": {"/a/x.py": 12.5}
            }
        });
        let prefs = GlobalPreferences::from_value(value).unwrap();
        assert_eq!(prefs.recent_folders, vec!["/a", "/b"]);
        let record = &prefs.folders["/a"];
        assert_eq!(record.extensions, vec![".py"]);
        assert_eq!(record.files, vec!["/a/x.py"]);
        assert_eq!(record.file_times["/a/x.py"], 12.5);
    }

    #[test]
    fn test_legacy_record_without_times() {
        let value = json!({"folderX": {"extensions": [".py"]}});
        let prefs = GlobalPreferences::from_value(value).unwrap();
        assert!(prefs.recent_folders.is_empty());
        let record = &prefs.folders["folderX"];
        assert_eq!(record.extensions, vec![".py"]);
        assert!(record.files.is_empty());
        assert!(record.file_times.is_empty());
    }

    #[test]
    fn test_invalid_folder_entry_is_reset() {
        let value = json!({"/a": "not a record", "/b": {"extensions": 3}});
        let prefs = GlobalPreferences::from_value(value).unwrap();
        assert_eq!(prefs.folders["/a"], PreferenceRecord::default());
        assert_eq!(prefs.folders["/b"], PreferenceRecord::default());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(GlobalPreferences::from_value(json!([1, 2])).is_err());
        assert!(GlobalPreferences::from_value(json!("x")).is_err());
    }

    #[test]
    fn test_malformed_recent_folders() {
        let prefs =
            GlobalPreferences::from_value(json!({"_recent_folders": ["/a", 1, null, "/b"]}))
                .unwrap();
        assert_eq!(prefs.recent_folders, vec!["/a", "/b"]);

        let prefs = GlobalPreferences::from_value(json!({"_recent_folders": "/a"})).unwrap();
        assert!(prefs.recent_folders.is_empty());
    }

    #[test]
    fn test_serialize_uses_reserved_key() {
        let mut prefs = GlobalPreferences::default();
        prefs.recent_folders.push("/a".to_string());
        prefs
            .folders
            .insert("/a".to_string(), PreferenceRecord::default());
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["_recent_folders"], json!(["/a"]));
        assert_eq!(value["/a"]["extensions"], json!([]));
    }
}
