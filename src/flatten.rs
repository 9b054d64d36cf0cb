//! Pulls every nested file up into the root folder and removes the folders left behind.

use crate::fs_util::{depth, is_dir_empty};
use crate::sink::ActionSink;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What to do when a file with the same name already sits in the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConflictMode {
    /// Move it anyway under a free `name (n).ext`.
    #[default]
    Rename,
    /// Leave it where it is.
    Skip,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlattenResult {
    /// Nested files considered for moving.
    pub encountered: usize,
    pub moved: usize,
    pub skipped_conflicts: usize,
    pub removed_folders: usize,
    /// (source, destination) for each completed move, in order.
    pub moves: Vec<(PathBuf, PathBuf)>,
    pub errors: Vec<String>,
}

pub fn flatten(root: &Path, mode: ConflictMode, sink: &dyn ActionSink) -> FlattenResult {
    let mut result = FlattenResult::default();

    if !root.is_dir() {
        let msg = format!("Invalid root folder: {}", root.display());
        sink.error(&msg);
        result.errors.push(msg);
        return result;
    }

    // The full list is collected before anything moves so the walk never sees a mutating tree.
    let nested = collect_nested_files(root, &mut result, sink);
    result.encountered = nested.len();

    for src in nested {
        let Some(name) = src.file_name() else {
            continue;
        };
        let mut dest = root.join(name);
        if occupied(&dest) {
            match mode {
                ConflictMode::Skip => {
                    result.skipped_conflicts += 1;
                    sink.info(&format!(
                        "Skip due to conflict: {} -> {}",
                        src.display(),
                        dest.display()
                    ));
                    continue;
                }
                ConflictMode::Rename => dest = unique_destination(root, Path::new(name)),
            }
        }

        match move_file(&src, &dest) {
            Ok(()) => {
                result.moved += 1;
                sink.info(&format!("Moved file: {} -> {}", src.display(), dest.display()));
                result.moves.push((src, dest));
            }
            Err(e) => {
                let msg = format!("Error moving {}: {}", src.display(), e);
                sink.error(&msg);
                result.errors.push(msg);
            }
        }
    }

    remove_emptied_folders(root, &mut result, sink);
    result
}

fn collect_nested_files(
    root: &Path,
    result: &mut FlattenResult,
    sink: &dyn ActionSink,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .min_depth(2)
    {
        match entry {
            Ok(entry) if !entry.file_type().is_dir() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                let msg = format!("Error scanning {}: {}", root.display(), e);
                sink.error(&msg);
                result.errors.push(msg);
            }
        }
    }
    files
}

fn remove_emptied_folders(root: &Path, result: &mut FlattenResult, sink: &dyn ActionSink) {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => dirs.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                let msg = format!("Error enumerating directories in {}: {}", root.display(), e);
                sink.warn(&msg);
                result.errors.push(msg);
            }
        }
    }
    dirs.sort_by(|a, b| depth(b).cmp(&depth(a)));

    for dir in dirs {
        match is_dir_empty(&dir) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                let msg = format!("Error reading {}: {}", dir.display(), e);
                sink.warn(&msg);
                result.errors.push(msg);
                continue;
            }
        }
        match fs::remove_dir(&dir) {
            Ok(()) => {
                result.removed_folders += 1;
                sink.info(&format!("Removed empty folder: {}", dir.display()));
            }
            Err(e) => {
                let msg = format!("Error removing {}: {}", dir.display(), e);
                sink.warn(&msg);
                result.errors.push(msg);
            }
        }
    }
}

// Broken symlinks occupy a name too, so `exists()` is not enough.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// First free `stem (n).ext` in `root`, counting n from 1.
fn unique_destination(root: &Path, name: &Path) -> PathBuf {
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = root.join(format!("{stem} ({counter}){suffix}"));
        if !occupied(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(windows)]
const CROSS_DEVICE: i32 = 17; // ERROR_NOT_SAME_DEVICE
#[cfg(not(windows))]
const CROSS_DEVICE: i32 = 18; // EXDEV

// Rename; only a cross-device regular file falls back to copy and delete.
fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    let err = match fs::rename(src, dest) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    let regular = fs::symlink_metadata(src)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false);
    if err.raw_os_error() != Some(CROSS_DEVICE) || !regular {
        return Err(err);
    }

    fs::copy(src, dest)?;
    if let Err(e) = fs::remove_file(src) {
        // Never leave a second copy behind for a file reported as not moved.
        let _ = fs::remove_file(dest);
        return Err(e);
    }
    Ok(())
}
