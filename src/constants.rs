// src/constants.rs

/// Banner line used by the plain-text report.
pub const TEXT_BANNER: &str =
    "============================================================";

/// Title of the plain-text report.
pub const TEXT_REPORT_TITLE: &str = "FILE SUMMARY REPORT";

/// Title of the Markdown report.
pub const MARKDOWN_REPORT_TITLE: &str = "# File Summary Report";

/// Timestamp format shown in the report header.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in summary file names.
pub const FILE_NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Prefix of generated summary files (`map-<timestamp>.txt`).
pub const OUTPUT_FILE_PREFIX: &str = "map-";

/// Number of CSS class selectors listed per stylesheet before truncating.
pub const MAX_LISTED_CSS_CLASSES: usize = 10;

/// Content stored in a record whose file could not be read.
pub const UNREADABLE_CONTENT: &str = "Error reading file content.";

/// Maximum number of entries kept in the recent-folders list.
pub const MAX_RECENT_FOLDERS: usize = 10;

/// Reserved top-level key of the preference document.
pub const RECENT_FOLDERS_KEY: &str = "_recent_folders";

/// File name of the current-format preference document.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// File name of the legacy preference document.
pub const LEGACY_PREFERENCES_FILE_NAME: &str = "folder_preferences.json";

/// Minimum number of backticks for Markdown code fences.
pub const MIN_FENCE_TICKS: usize = 3;
