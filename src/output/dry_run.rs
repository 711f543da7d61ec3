// src/output/dry_run.rs

use crate::core_types::CandidateFile;
use crate::output::formatter::{format_path_for_display, format_size};
use crate::selection::{folder_check_state, CheckState};
use anyhow::Result;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct FolderNode<'a> {
    folders: BTreeMap<String, FolderNode<'a>>,
    files: Vec<&'a CandidateFile>,
}

impl<'a> FolderNode<'a> {
    fn insert(&mut self, candidate: &'a CandidateFile) {
        let mut node = self;
        if let Some(parent) = candidate.relative_path.parent() {
            for part in parent.iter() {
                node = node
                    .folders
                    .entry(part.to_string_lossy().into_owned())
                    .or_default();
            }
        }
        node.files.push(candidate);
    }

    fn state(&self, selected: &BTreeSet<PathBuf>) -> CheckState {
        let mut children: Vec<CheckState> = self
            .folders
            .values()
            .map(|folder| folder.state(selected))
            .collect();
        children.extend(
            self.files
                .iter()
                .map(|f| CheckState::from_bool(selected.contains(&f.absolute_path))),
        );
        folder_check_state(&children)
    }

    fn write(
        &self,
        writer: &mut dyn Write,
        selected: &BTreeSet<PathBuf>,
        depth: usize,
    ) -> Result<()> {
        let indent = "    ".repeat(depth);
        for (name, folder) in &self.folders {
            writeln!(
                writer,
                "{}{} {}/",
                indent,
                folder.state(selected).marker(),
                name
            )?;
            folder.write(writer, selected, depth + 1)?;
        }
        let mut files = self.files.clone();
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        for file in files {
            let state = CheckState::from_bool(selected.contains(&file.absolute_path));
            let name = file
                .relative_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| format_path_for_display(&file.relative_path));
            let status = file.status.label();
            if status.is_empty() {
                writeln!(
                    writer,
                    "{}{} {} ({})",
                    indent,
                    state.marker(),
                    name,
                    format_size(file.size)
                )?;
            } else {
                writeln!(
                    writer,
                    "{}{} {} ({}) {}",
                    indent,
                    state.marker(),
                    name,
                    format_size(file.size),
                    status
                )?;
            }
        }
        Ok(())
    }
}

/// Case-insensitive substring match on the relative path. `needle` must
/// already be lowercase.
fn matches_search(candidate: &CandidateFile, needle: &str) -> bool {
    let path = format_path_for_display(&candidate.relative_path).to_lowercase();
    path.contains(needle)
}

/// Writes the candidate tree for a dry run (-D).
///
/// Folders come before files at every level. Each entry shows its check
/// state; files also show their size and change status. `search` hides
/// files whose path does not contain it, but the closing selection total
/// always counts every selected candidate.
pub(crate) fn write_dry_run_output(
    writer: &mut dyn Write,
    root: &Path,
    candidates: &[CandidateFile],
    selected: &BTreeSet<PathBuf>,
    search: Option<&str>,
) -> Result<()> {
    debug!("Executing dry run output...");
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());

    let mut tree = FolderNode::default();
    for candidate in candidates {
        if needle.as_deref().map_or(true, |n| matches_search(candidate, n)) {
            tree.insert(candidate);
        }
    }

    writeln!(writer, "\n--- Dry Run: {} ---", root.display())?;
    tree.write(writer, selected, 0)?;

    let chosen: Vec<&CandidateFile> = candidates
        .iter()
        .filter(|c| selected.contains(&c.absolute_path))
        .collect();
    let total: u64 = chosen.iter().map(|c| c.size).sum();
    writeln!(
        writer,
        "--- {} files selected ({} total) ---",
        chosen.len(),
        format_size(total)
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ChangeStatus;
    use std::io::Cursor;

    fn candidate(rel: &str, size: u64, status: ChangeStatus) -> CandidateFile {
        CandidateFile {
            absolute_path: PathBuf::from("/base").join(rel),
            relative_path: PathBuf::from(rel),
            size,
            status,
        }
    }

    fn render(
        candidates: &[CandidateFile],
        selected: &[&str],
        search: Option<&str>,
    ) -> Result<String> {
        let selected: BTreeSet<PathBuf> = selected
            .iter()
            .map(|rel| PathBuf::from("/base").join(rel))
            .collect();
        let mut writer = Cursor::new(Vec::new());
        write_dry_run_output(&mut writer, Path::new("/base"), candidates, &selected, search)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn sample() -> Vec<CandidateFile> {
        vec![
            candidate("README.md", 300, ChangeStatus::Modified),
            candidate("src/a.py", 10, ChangeStatus::New),
            candidate("src/util/b.py", 20, ChangeStatus::Unchanged),
        ]
    }

    #[test]
    fn test_dry_run_tree_layout() -> Result<()> {
        let output = render(&sample(), &["src/a.py", "src/util/b.py"], None)?;
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "--- Dry Run: /base ---");
        assert_eq!(lines[2], "[x] src/");
        assert_eq!(lines[3], "    [x] util/");
        assert!(lines[4].starts_with("        [x] b.py ("));
        assert!(!lines[4].ends_with("Unchanged"));
        assert!(lines[5].starts_with("    [x] a.py ("));
        assert!(lines[5].ends_with(") New"));
        assert!(lines[6].starts_with("[ ] README.md ("));
        assert!(lines[6].ends_with(") Modified"));
        assert!(lines[7].starts_with("--- 2 files selected ("));
        Ok(())
    }

    #[test]
    fn test_partially_selected_folder_is_unchecked() -> Result<()> {
        let output = render(&sample(), &["src/a.py"], None)?;
        assert!(output.contains("[ ] src/\n"));
        assert!(output.contains("    [ ] util/\n"));
        assert!(output.contains("--- 1 files selected ("));
        Ok(())
    }

    #[test]
    fn test_search_hides_entries_but_not_totals() -> Result<()> {
        let output = render(&sample(), &["README.md", "src/a.py"], Some("UTIL"))?;
        assert!(output.contains("util/"));
        assert!(!output.contains("a.py"));
        assert!(!output.contains("README.md"));
        assert!(output.contains("--- 2 files selected ("));
        Ok(())
    }

    #[test]
    fn test_dry_run_empty() -> Result<()> {
        let output = render(&[], &[], None)?;
        assert!(output.starts_with("\n--- Dry Run: /base ---\n--- 0 files selected ("));
        Ok(())
    }
}
