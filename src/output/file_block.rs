use crate::constants::{MAX_LISTED_CSS_CLASSES, MIN_FENCE_TICKS};
use crate::core_types::{FileKind, FileRecord};
use crate::output::formatter::{format_path_for_display, relative_to_root};
use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Writes the heading that opens the section for one type.
pub(crate) fn write_group_heading(
    writer: &mut dyn Write,
    kind: FileKind,
    markdown: bool,
) -> Result<()> {
    if markdown {
        writeln!(writer, "## {} Files\n", kind)?;
    } else {
        writeln!(writer, "=== {} Files ===\n", kind)?;
    }
    Ok(())
}

/// The first ten CSS classes, comma separated, and the marker to append
/// when some were left out.
fn css_class_list(classes: &[String]) -> (String, &'static str) {
    let shown = classes
        .iter()
        .take(MAX_LISTED_CSS_CLASSES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let more = if classes.len() > MAX_LISTED_CSS_CLASSES {
        " ..."
    } else {
        ""
    };
    (shown, more)
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

/// Writes one record of a plain-text report.
pub(crate) fn write_text_block(
    writer: &mut dyn Write,
    record: &FileRecord,
    root: &Path,
) -> Result<()> {
    let rel_path = format_path_for_display(&relative_to_root(&record.absolute_path, root));
    debug!("Writing text block for {}", rel_path);

    writeln!(writer, "---")?;
    writeln!(writer, "File: {}", rel_path)?;
    writeln!(writer, "Lines: {}", record.line_count)?;
    writeln!(writer, "---")?;

    if record.kind.lists_functions() {
        writeln!(writer, "Functions: {}", list_or_none(&record.functions))?;
        writeln!(writer, "Classes: {}", list_or_none(&record.classes))?;
    } else if record.kind == FileKind::Css && !record.classes.is_empty() {
        let (shown, more) = css_class_list(&record.classes);
        writeln!(writer, "Classes: {}{}", shown, more)?;
    }

    writeln!(writer, "\nContents:")?;
    writeln!(writer, "{}", record.content)?;
    writeln!(writer, "\n")?;
    Ok(())
}

/// Returns a backtick fence longer than any backtick run inside `content`.
///
/// # Examples
/// ```
/// use foldermap::output::file_block::fence_for;
/// assert_eq!(fence_for("plain"), "```");
/// assert_eq!(fence_for("has ``` inside"), "````");
/// assert_eq!(fence_for("````` five"), "``````");
/// ```
pub fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for ch in content.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat(MIN_FENCE_TICKS.max(longest + 1))
}

/// Writes one record of a Markdown report.
pub(crate) fn write_markdown_block(
    writer: &mut dyn Write,
    record: &FileRecord,
    root: &Path,
) -> Result<()> {
    let rel_path = format_path_for_display(&relative_to_root(&record.absolute_path, root));
    debug!("Writing markdown block for {}", rel_path);

    writeln!(writer, "### `{}`", rel_path)?;
    writeln!(writer, "*Lines: {}*\n", record.line_count)?;

    if record.kind.lists_functions() {
        if !record.functions.is_empty() {
            writeln!(writer, "**Functions:** `{}`", record.functions.join(", "))?;
        }
        if !record.classes.is_empty() {
            writeln!(writer, "**Classes:** `{}`", record.classes.join(", "))?;
        }
    } else if record.kind == FileKind::Css && !record.classes.is_empty() {
        let (shown, more) = css_class_list(&record.classes);
        writeln!(writer, "**Classes:** `{}`{}", shown, more)?;
    }

    let fence = fence_for(&record.content);
    writeln!(writer, "\n{}{}", fence, record.kind.fence_hint())?;
    writeln!(writer, "{}", record.content)?;
    writeln!(writer, "{}\n", fence)?;
    Ok(())
}
