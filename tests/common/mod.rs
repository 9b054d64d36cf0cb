//! Helpers for building throwaway folder trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn tree() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create the directory `rel` (and its parents) under `root`.
pub fn dir(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(&path).unwrap();
    path
}

/// Write `contents` to `rel` under `root`, creating parent folders as needed.
pub fn file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Relative paths of every directory below `root`, sorted.
pub fn relative_dirs(root: &Path) -> Vec<PathBuf> {
    relative_entries(root, true)
}

/// Relative paths of every file below `root`, sorted.
pub fn relative_files(root: &Path) -> Vec<PathBuf> {
    relative_entries(root, false)
}

fn relative_entries(root: &Path, dirs: bool) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() == dirs)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    out.sort();
    out
}
