//! File counting. Everything here is advisory: an invalid root gives zero
//! rather than an error, and unreadable subtrees are logged and left out.

use crate::fs_util::read_children;
use crate::sink::ActionSink;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const NO_EXTENSION: &str = "no_extension";

/// Files sitting directly in `root`.
pub fn count_root_only(root: &Path, sink: &dyn ActionSink) -> usize {
    if !root.is_dir() {
        return 0;
    }
    match read_children(root) {
        Ok((files, _)) => files.len(),
        Err(e) => {
            sink.warn(&format!("Error listing {}: {}", root.display(), e));
            0
        }
    }
}

/// Every file anywhere under `root`, together with their number.
pub fn count_recursive(root: &Path, sink: &dyn ActionSink) -> (usize, Vec<PathBuf>) {
    if !root.is_dir() {
        return (0, Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .min_depth(1)
    {
        match entry {
            Ok(entry) if !entry.file_type().is_dir() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => sink.warn(&format!("Error scanning files under {}: {}", root.display(), e)),
        }
    }
    (files.len(), files)
}

/// Per-folder and per-extension breakdown of a tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountDetails {
    pub total_files: usize,
    /// Folders below the root; the root itself is not counted.
    pub total_folders: usize,
    /// Folders (root included) with no entries at all.
    pub empty_folders: Vec<PathBuf>,
    /// Folders holding at least one file directly, with that file count.
    pub folders_with_files: Vec<(PathBuf, usize)>,
    /// Lowercase extension with its leading dot, or `no_extension`.
    pub files_by_type: BTreeMap<String, usize>,
    pub files: Vec<PathBuf>,
}

pub fn count_details(root: &Path, sink: &dyn ActionSink) -> CountDetails {
    let mut details = CountDetails::default();
    if root.is_dir() {
        analyze_folder(root, &mut details, sink);
    }
    details
}

fn analyze_folder(folder: &Path, details: &mut CountDetails, sink: &dyn ActionSink) {
    let (files, subdirs) = match read_children(folder) {
        Ok(children) => children,
        Err(e) => {
            sink.warn(&format!("Permission error accessing {}: {}", folder.display(), e));
            return;
        }
    };

    if files.is_empty() && subdirs.is_empty() {
        details.empty_folders.push(folder.to_path_buf());
    } else if !files.is_empty() {
        details
            .folders_with_files
            .push((folder.to_path_buf(), files.len()));
    }

    for file in files {
        *details.files_by_type.entry(extension_key(&file)).or_insert(0) += 1;
        details.total_files += 1;
        details.files.push(file);
    }

    details.total_folders += subdirs.len();
    for subdir in &subdirs {
        analyze_folder(subdir, details, sink);
    }
}

fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => NO_EXTENSION.to_string(),
    }
}

/// Byte totals for a set of files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SizeSummary {
    pub total_bytes: u64,
    /// Extension key to (file count, bytes).
    pub by_type: BTreeMap<String, (usize, u64)>,
}

/// Stats `files` in parallel. Files that cannot be stat'ed are skipped.
pub fn summarize_sizes(files: &[PathBuf]) -> SizeSummary {
    let sizes: Vec<(String, u64)> = files
        .par_iter()
        .filter_map(|file| {
            fs::symlink_metadata(file)
                .ok()
                .map(|meta| (extension_key(file), meta.len()))
        })
        .collect();

    let mut summary = SizeSummary::default();
    for (key, size) in sizes {
        summary.total_bytes += size;
        let slot = summary.by_type.entry(key).or_insert((0, 0));
        slot.0 += 1;
        slot.1 += size;
    }
    summary
}

/// Human readable size in 1024 steps, e.g. `0 B`, `512.0 B`, `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}
