// src/output/header.rs

use super::summary::{format_thousands, SummaryStats};
use crate::constants::{
    MARKDOWN_REPORT_TITLE, REPORT_TIMESTAMP_FORMAT, TEXT_BANNER, TEXT_REPORT_TITLE,
};
use anyhow::Result;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::Write;

/// Writes the banner, timestamp, folder and statistics block of a plain-text
/// report.
pub(crate) fn write_text_header<Tz: TimeZone>(
    writer: &mut dyn Write,
    stats: &SummaryStats,
    root_label: &str,
    generated: &DateTime<Tz>,
) -> Result<()>
where
    Tz::Offset: Display,
{
    writeln!(writer, "{}", TEXT_BANNER)?;
    writeln!(writer, "{}", TEXT_REPORT_TITLE)?;
    writeln!(writer, "{}", TEXT_BANNER)?;
    writeln!(
        writer,
        "Generated: {}",
        generated.format(REPORT_TIMESTAMP_FORMAT)
    )?;
    writeln!(writer, "Folder: {}", root_label)?;
    writeln!(writer, "\nStatistics:")?;
    writeln!(writer, "  Total Files: {}", stats.total_files)?;
    writeln!(
        writer,
        "  Total Lines: {}",
        format_thousands(stats.total_lines)
    )?;
    writeln!(writer, "\nFile Types:")?;
    for (label, count) in &stats.per_kind {
        writeln!(writer, "  - {}: {} files", label, count)?;
    }
    writeln!(writer, "\n{}\n", TEXT_BANNER)?;
    Ok(())
}

/// Writes the title, timestamp, folder and statistics block of a Markdown
/// report.
pub(crate) fn write_markdown_header<Tz: TimeZone>(
    writer: &mut dyn Write,
    stats: &SummaryStats,
    root_label: &str,
    generated: &DateTime<Tz>,
) -> Result<()>
where
    Tz::Offset: Display,
{
    writeln!(writer, "{}", MARKDOWN_REPORT_TITLE)?;
    writeln!(
        writer,
        "\n**Generated:** {}",
        generated.format(REPORT_TIMESTAMP_FORMAT)
    )?;
    writeln!(writer, "**Folder:** `{}`", root_label)?;
    writeln!(writer, "\n## Statistics")?;
    writeln!(writer, "- **Total Files:** {}", stats.total_files)?;
    writeln!(
        writer,
        "- **Total Lines:** {}",
        format_thousands(stats.total_lines)
    )?;
    writeln!(writer, "\n### File Types")?;
    for (label, count) in &stats.per_kind {
        writeln!(writer, "- {}: {} files", label, count)?;
    }
    writeln!(writer, "\n---\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::Cursor;

    fn stats() -> SummaryStats {
        let mut stats = SummaryStats {
            total_files: 3,
            total_lines: 12345,
            ..Default::default()
        };
        stats.per_kind.insert("CSS", 1);
        stats.per_kind.insert("Python", 2);
        stats
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_text_header_exact() -> Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_text_header(&mut writer, &stats(), "/proj", &fixed_time())?;
        let output = String::from_utf8(writer.into_inner())?;
        let expected = format!(
            "{b}\nFILE SUMMARY REPORT\n{b}\nGenerated: 2024-03-09 14:05:07\nFolder: /proj\n\
             \nStatistics:\n  Total Files: 3\n  Total Lines: 12,345\n\
             \nFile Types:\n  - CSS: 1 files\n  - Python: 2 files\n\n{b}\n\n",
            b = TEXT_BANNER
        );
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_markdown_header_exact() -> Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_markdown_header(&mut writer, &stats(), "/proj", &fixed_time())?;
        let output = String::from_utf8(writer.into_inner())?;
        let expected = "# File Summary Report\n\n**Generated:** 2024-03-09 14:05:07\n\
                        **Folder:** `/proj`\n\n## Statistics\n- **Total Files:** 3\n\
                        - **Total Lines:** 12,345\n\n### File Types\n- CSS: 1 files\n\
                        - Python: 2 files\n\n---\n\n";
        assert_eq!(output, expected);
        Ok(())
    }
}
