use crate::cancellation::CancellationToken;
use crate::errors::Result;
use crate::filtering::{is_ignored_dir_name, should_ignore};
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// A regular file yielded by the walk that survived the built-in ignore rules.
pub(super) struct WalkedFile {
    pub path: PathBuf,
    pub metadata: Metadata,
}

/// Configures and builds the `ignore::Walk` for `root`.
///
/// Standard filters (.gitignore, hidden files) are disabled: the built-in
/// ignore rules are the only exclusion mechanism. Ignored directories are
/// pruned in `filter_entry`, so their subtrees are never read.
pub(super) fn build_walker(root: &Path) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard_filters disabled, sorted by name.");

    walker_builder.filter_entry(|entry| {
        // Never prune the root itself, whatever it is called.
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir {
            if let Some(name) = entry.file_name().to_str() {
                if is_ignored_dir_name(name) {
                    trace!("Pruning ignored directory: {:?}", entry.path());
                    return false;
                }
            }
        }
        true
    });

    walker_builder.build()
}

/// Walks `root` and calls `visit` for every regular file not excluded by the
/// built-in ignore rules.
///
/// Walker and metadata errors are logged and the entry is skipped. The token
/// is checked before every entry.
pub(super) fn walk_files<F>(root: &Path, token: &CancellationToken, mut visit: F) -> Result<()>
where
    F: FnMut(WalkedFile),
{
    token.ensure_active()?;

    for entry_result in build_walker(root) {
        token.ensure_active()?;

        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Walker error: {}", e);
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let path = entry.path();
        if should_ignore(path, root) {
            debug!("Skipping ignored file: {}", path.display());
            continue;
        }

        // Follows symlinks, so links to regular files are included.
        let metadata = match fs::metadata(path) {
            Ok(md) => md,
            Err(e) => {
                warn!(
                    "Skipping entry '{}' due to metadata error: {}",
                    path.display(),
                    e
                );
                continue;
            }
        };
        if !metadata.is_file() {
            trace!("Skipping non-file entry: {}", path.display());
            continue;
        }

        visit(WalkedFile {
            path: path.to_path_buf(),
            metadata,
        });
    }

    Ok(())
}
