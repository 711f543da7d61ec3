// src/output/summary.rs

use crate::core_types::{FileKind, FileRecord};
use std::collections::BTreeMap;

/// Totals shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total_files: usize,
    pub total_lines: usize,
    /// Record count per type label, sorted by label.
    pub per_kind: BTreeMap<&'static str, usize>,
}

impl SummaryStats {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut stats = SummaryStats {
            total_files: records.len(),
            ..Default::default()
        };
        for record in records {
            stats.total_lines += record.line_count;
            *stats.per_kind.entry(record.kind.label()).or_insert(0) += 1;
        }
        stats
    }
}

/// Groups records by type label, sorted by label, keeping the supplied order
/// inside each group.
pub(crate) fn group_by_kind(records: &[FileRecord]) -> Vec<(FileKind, Vec<&FileRecord>)> {
    let mut groups: BTreeMap<&'static str, (FileKind, Vec<&FileRecord>)> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.kind.label())
            .or_insert_with(|| (record.kind, Vec::new()))
            .1
            .push(record);
    }
    groups.into_values().collect()
}

/// Formats an integer with `,` as the thousands separator.
///
/// # Examples
/// ```
/// use foldermap::output::summary::format_thousands;
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
