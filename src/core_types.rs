//! Defines core data structures used throughout the application pipeline.
//!
//! `CandidateFile` is produced by discovery, `FileRecord` by extraction, and
//! both are consumed by the output stage.

use std::fmt;
use std::path::PathBuf;

/// The detected type of a file, which decides how its content is extracted
/// and under which heading it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    Python,
    JavaScript,
    Css,
    Html,
    Docker,
    Other,
}

impl FileKind {
    /// The label used in report headings and statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldermap::core_types::FileKind;
    ///
    /// assert_eq!(FileKind::Css.label(), "CSS");
    /// assert_eq!(FileKind::JavaScript.label(), "JavaScript");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Python => "Python",
            FileKind::JavaScript => "JavaScript",
            FileKind::Css => "CSS",
            FileKind::Html => "HTML",
            FileKind::Docker => "Docker",
            FileKind::Other => "Other",
        }
    }

    /// Language hint for Markdown code fences. `Other` has none.
    pub fn fence_hint(self) -> String {
        match self {
            FileKind::Other => String::new(),
            kind => kind.label().to_lowercase(),
        }
    }

    /// Whether records of this kind carry function and class names.
    pub fn lists_functions(self) -> bool {
        matches!(self, FileKind::Python | FileKind::JavaScript)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Change status of a discovered file relative to the modification time
/// recorded the last time it was included in a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// No timestamp was recorded for this path.
    New,
    /// The file changed after the recorded timestamp.
    Modified,
    Unchanged,
}

impl ChangeStatus {
    /// Short label for listings. `Unchanged` renders as an empty string.
    pub fn label(self) -> &'static str {
        match self {
            ChangeStatus::New => "New",
            ChangeStatus::Modified => "Modified",
            ChangeStatus::Unchanged => "",
        }
    }
}

/// A file found by the catalog walk that passed every filter.
///
/// # Examples
///
/// ```
/// use foldermap::core_types::{CandidateFile, ChangeStatus};
/// use std::path::PathBuf;
///
/// let candidate = CandidateFile {
///     absolute_path: PathBuf::from("/project/src/main.py"),
///     relative_path: PathBuf::from("src/main.py"),
///     size: 42,
///     status: ChangeStatus::New,
/// };
/// assert_eq!(candidate.relative_path.to_str(), Some("src/main.py"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    /// The absolute path to the file.
    pub absolute_path: PathBuf,
    /// The path relative to the analyzed root.
    pub relative_path: PathBuf,
    /// The size of the file in bytes.
    pub size: u64,
    /// New / Modified / Unchanged. Informational only.
    pub status: ChangeStatus,
}

/// The extracted view of one file, built when a summary is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// The absolute path of the source file.
    pub absolute_path: PathBuf,
    /// The detected type.
    pub kind: FileKind,
    /// Number of lines in `content`.
    pub line_count: usize,
    /// The raw file content, or a placeholder if it could not be read.
    pub content: String,
    /// Function names (Python and JavaScript), in the order found.
    pub functions: Vec<String>,
    /// Class names (Python and JavaScript) or class selectors (CSS).
    pub classes: Vec<String>,
    /// Id selectors (CSS).
    pub ids: Vec<String>,
}

/// Counts lines the way a universal line splitter does: `\n`, `\r`, `\r\n`,
/// `\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}` and `\u{2029}` all end
/// a line, and a final unterminated line counts too.
///
/// # Examples
/// ```
/// use foldermap::core_types::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb"), 2);
/// assert_eq!(count_lines("a\r\nb\n"), 2);
/// assert_eq!(count_lines("page1\x0cpage2\n"), 2);
/// ```
pub fn count_lines(content: &str) -> usize {
    let mut count = 0;
    let mut open_line = false;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
                open_line = false;
            }
            '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => {
                count += 1;
                open_line = false;
            }
            _ => open_line = true,
        }
    }
    if open_line {
        count += 1;
    }
    count
}

impl FileRecord {
    /// Builds a record holding plain content with no extracted symbols.
    pub fn plain(absolute_path: PathBuf, kind: FileKind, content: String) -> Self {
        let line_count = count_lines(&content);
        Self {
            absolute_path,
            kind,
            line_count,
            content,
            functions: Vec::new(),
            classes: Vec::new(),
            ids: Vec::new(),
        }
    }

    /// Builds the record used when a file could not be read.
    pub fn unreadable(absolute_path: PathBuf, kind: FileKind) -> Self {
        Self {
            absolute_path,
            kind,
            line_count: 0,
            content: crate::constants::UNREADABLE_CONTENT.to_string(),
            functions: Vec::new(),
            classes: Vec::new(),
            ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_hint() {
        assert_eq!(FileKind::Python.fence_hint(), "python");
        assert_eq!(FileKind::Css.fence_hint(), "css");
        assert_eq!(FileKind::Other.fence_hint(), "");
    }

    #[test]
    fn test_plain_record_counts_lines() {
        let record = FileRecord::plain(
            PathBuf::from("/x/index.html"),
            FileKind::Html,
            "<html>\n<body></body>\n</html>\n".to_string(),
        );
        assert_eq!(record.line_count, 3);
        assert!(record.functions.is_empty());
    }

    #[test]
    fn test_plain_record_counts_form_feed_and_unicode_separators() {
        let record = FileRecord::plain(
            PathBuf::from("/x/notes.txt"),
            FileKind::Other,
            "one\x0ctwo\u{2028}three\n\nfive".to_string(),
        );
        assert_eq!(record.line_count, 5);
    }

    #[test]
    fn test_unreadable_record_is_empty() {
        let record = FileRecord::unreadable(PathBuf::from("/x/a.py"), FileKind::Python);
        assert_eq!(record.line_count, 0);
        assert_eq!(record.content, crate::constants::UNREADABLE_CONTENT);
        assert!(record.classes.is_empty());
        assert!(record.ids.is_empty());
    }
}
