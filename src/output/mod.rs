// src/output/mod.rs

//! Renders extracted records into a single summary document.
//!
//! A document starts with a statistics header, followed by one section per
//! file type (sorted by type label) holding the records of that type in the
//! order they were supplied.

use crate::core_types::FileRecord;
use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use clap::ValueEnum;
use log::debug;
use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;

pub mod dry_run;
pub mod file_block;
pub mod formatter;
pub mod header;
pub mod summary;
pub mod writer;

pub(crate) use dry_run::write_dry_run_output;
pub use summary::SummaryStats;

/// Layout of the summary document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Banner-delimited plain text.
    #[default]
    Text,
    /// Headings and fenced code blocks.
    Markdown,
}

impl OutputFormat {
    /// Extension of the generated summary file, with the leading dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            OutputFormat::Text => ".txt",
            OutputFormat::Markdown => ".md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Markdown => f.write_str("markdown"),
        }
    }
}

/// Writes the full document for `records` to `writer`.
///
/// Paths are shown relative to `root`; `generated` is the timestamp printed
/// in the header.
pub fn write_summary<Tz: TimeZone>(
    writer: &mut dyn Write,
    records: &[FileRecord],
    root: &Path,
    format: OutputFormat,
    generated: &DateTime<Tz>,
) -> Result<()>
where
    Tz::Offset: Display,
{
    debug!(
        "Rendering {} record(s) as {} for {}",
        records.len(),
        format,
        root.display()
    );
    let stats = SummaryStats::from_records(records);
    let root_label = root.display().to_string();
    let markdown = format == OutputFormat::Markdown;

    if markdown {
        header::write_markdown_header(writer, &stats, &root_label, generated)?;
    } else {
        header::write_text_header(writer, &stats, &root_label, generated)?;
    }

    for (kind, group) in summary::group_by_kind(records) {
        file_block::write_group_heading(writer, kind, markdown)?;
        for record in group {
            if markdown {
                file_block::write_markdown_block(writer, record, root)?;
            } else {
                file_block::write_text_block(writer, record, root)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Renders the document as a string, stamped with `generated`.
pub fn render_at<Tz: TimeZone>(
    records: &[FileRecord],
    root: &Path,
    format: OutputFormat,
    generated: &DateTime<Tz>,
) -> Result<String>
where
    Tz::Offset: Display,
{
    let mut buffer = Vec::new();
    write_summary(&mut buffer, records, root, format, generated)?;
    Ok(String::from_utf8(buffer)?)
}

/// Renders the document as a string, stamped with the current local time.
///
/// # Examples
/// ```
/// use foldermap::output::{render, OutputFormat};
/// use std::path::Path;
///
/// let document = render(&[], Path::new("/project"), OutputFormat::Text).unwrap();
/// assert!(document.contains("Total Files: 0"));
/// assert!(document.contains("Total Lines: 0"));
/// ```
pub fn render(records: &[FileRecord], root: &Path, format: OutputFormat) -> Result<String> {
    render_at(records, root, format, &Local::now())
}
