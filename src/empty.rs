//! Finds directory trees that hold no files anywhere below them.

use crate::fs_util::read_children;
use crate::sink::ActionSink;
use std::path::{Path, PathBuf};

/// Returns every directory under `root` (root included) that is an empty structure.
///
/// A directory is emitted when it has no entries, or when it holds only
/// subdirectories and every one of them was emitted too. A directory holding a
/// file at its own level is never emitted, but its subdirectories are still
/// examined on their own. Children are listed before their parent.
pub fn classify_empty(root: &Path, sink: &dyn ActionSink) -> Vec<PathBuf> {
    let mut empty = Vec::new();
    if !root.is_dir() {
        return empty;
    }
    classify_into(root, &mut empty, sink);
    empty
}

// Returns whether `dir` itself was emitted.
fn classify_into(dir: &Path, empty: &mut Vec<PathBuf>, sink: &dyn ActionSink) -> bool {
    let (files, subdirs) = match read_children(dir) {
        Ok(children) => children,
        Err(e) => {
            sink.warn(&format!("Permission error accessing {}: {}", dir.display(), e));
            return false;
        }
    };

    if files.is_empty() && subdirs.is_empty() {
        empty.push(dir.to_path_buf());
        return true;
    }

    if !files.is_empty() {
        for subdir in &subdirs {
            classify_into(subdir, empty, sink);
        }
        return false;
    }

    let mut all_subdirs_empty = true;
    for subdir in &subdirs {
        if !classify_into(subdir, empty, sink) {
            all_subdirs_empty = false;
        }
    }

    if all_subdirs_empty {
        empty.push(dir.to_path_buf());
    }
    all_subdirs_empty
}
