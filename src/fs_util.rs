use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of path components; used to order work root-to-leaf or leaf-to-root.
pub(crate) fn depth(path: &Path) -> usize {
    path.components().count()
}

/// Immediate children of `dir`, split into (files, subdirectories) and sorted by name.
///
/// Anything that is not a directory counts as a file. Symlinks are not followed,
/// so a link to a directory lands in the file list.
pub(crate) fn read_children(dir: &Path) -> io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }

    files.sort();
    dirs.sort();
    Ok((files, dirs))
}

/// True when `dir` has no entries at all (hidden ones included).
pub(crate) fn is_dir_empty(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}

/// A real directory, not a symlink pointing at one.
pub(crate) fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
