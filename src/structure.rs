//! Directory skeletons: scanning one tree and recreating it somewhere else.

use crate::fs_util::depth;
use crate::report::BatchReport;
use crate::sink::ActionSink;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists `source` followed by every directory below it, depth-first and name-sorted.
///
/// Symlinks are not followed. Entries that cannot be read are logged and skipped.
pub fn scan_structure(source: &Path, sink: &dyn ActionSink) -> Vec<PathBuf> {
    if !source.is_dir() {
        return Vec::new();
    }

    let mut directories = Vec::new();
    for entry in WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => directories.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => sink.warn(&format!("Permission error scanning {}: {}", source.display(), e)),
        }
    }
    directories
}

/// Where each of `source_dirs` lands under `destination_root`.
///
/// Paths are taken relative to the parent of the first source directory, so the
/// source root's own name is recreated under the destination.
pub fn plan_structure(source_dirs: &[PathBuf], destination_root: &Path) -> Vec<PathBuf> {
    let Some(base) = relative_base(source_dirs) else {
        return Vec::new();
    };
    ordered_by_depth(source_dirs)
        .into_iter()
        .filter_map(|dir| dir.strip_prefix(&base).ok().map(|rel| destination_root.join(rel)))
        .collect()
}

/// Creates the directories in `source_dirs` under `destination_root`, parents first.
///
/// Only directories are created. If `destination_root` itself cannot be created
/// nothing else is attempted and the report carries that single error.
pub fn replicate_structure(
    source_dirs: &[PathBuf],
    destination_root: &Path,
    sink: &dyn ActionSink,
) -> BatchReport {
    if let Err(e) = fs::create_dir_all(destination_root) {
        let msg = format!(
            "Cannot create destination root {}: {}",
            destination_root.display(),
            e
        );
        sink.error(&msg);
        return BatchReport::fatal(msg);
    }

    let mut report = BatchReport::default();
    let Some(base) = relative_base(source_dirs) else {
        return report;
    };

    for source in ordered_by_depth(source_dirs) {
        let relative = match source.strip_prefix(&base) {
            Ok(relative) => relative,
            Err(_) => {
                let msg = format!(
                    "Error creating {}: not inside {}",
                    source.display(),
                    base.display()
                );
                sink.error(&msg);
                report.errors.push(msg);
                continue;
            }
        };

        let target = destination_root.join(relative);
        match fs::create_dir_all(&target) {
            Ok(()) => {
                report.succeeded += 1;
                sink.info(&format!("Created folder: {}", target.display()));
            }
            Err(e) => {
                let msg = format!("Error creating {}: {}", target.display(), e);
                sink.error(&msg);
                report.errors.push(msg);
            }
        }
    }

    report
}

fn relative_base(source_dirs: &[PathBuf]) -> Option<PathBuf> {
    let first = source_dirs.first()?;
    // A filesystem root is its own base.
    Some(first.parent().unwrap_or(first).to_path_buf())
}

fn ordered_by_depth(source_dirs: &[PathBuf]) -> Vec<&PathBuf> {
    let mut ordered: Vec<&PathBuf> = source_dirs.iter().collect();
    ordered.sort_by_key(|p| depth(p));
    ordered
}
