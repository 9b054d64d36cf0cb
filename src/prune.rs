//! Deletes directories previously classified as empty.

use crate::fs_util::{depth, is_dir_empty, is_real_dir};
use crate::report::BatchReport;
use crate::sink::ActionSink;
use std::fs;
use std::path::PathBuf;

/// Removes each of `paths`, deepest first, re-checking emptiness right before
/// every removal. Every path produces exactly one record in `sink`.
pub fn prune_folders(paths: &[PathBuf], sink: &dyn ActionSink) -> BatchReport {
    let mut report = BatchReport::default();

    let mut ordered: Vec<&PathBuf> = paths.iter().collect();
    ordered.sort_by(|a, b| depth(b).cmp(&depth(a)));

    for path in ordered {
        if !is_real_dir(path) {
            let msg = format!("Path does not exist or is not a directory: {}", path.display());
            sink.warn(&msg);
            report.errors.push(msg);
            continue;
        }

        match is_dir_empty(path) {
            Ok(true) => {}
            Ok(false) => {
                let msg = format!("Folder not empty, skipping: {}", path.display());
                sink.warn(&msg);
                report.errors.push(msg);
                continue;
            }
            Err(e) => {
                let msg = format!("Error reading {}: {}", path.display(), e);
                sink.error(&msg);
                report.errors.push(msg);
                continue;
            }
        }

        match fs::remove_dir(path) {
            Ok(()) => {
                report.succeeded += 1;
                sink.info(&format!("Deleted empty folder: {}", path.display()));
            }
            Err(e) => {
                let msg = format!("Error deleting {}: {}", path.display(), e);
                sink.error(&msg);
                report.errors.push(msg);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use log::Level;
    use tempfile::tempdir;

    #[test]
    fn removes_children_before_parents_regardless_of_input_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = a.join("b");
        let c = b.join("c");
        fs::create_dir_all(&c).unwrap();

        let sink = MemorySink::new();
        let report = prune_folders(&[a.clone(), c.clone(), b.clone()], &sink);

        assert_eq!(report.succeeded, 3);
        assert!(report.is_clean());
        assert!(!a.exists());
        assert_eq!(sink.count(Level::Info), 3);
    }

    #[test]
    fn missing_path_is_reported_and_batch_continues() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone");
        let present = dir.path().join("present");
        fs::create_dir(&present).unwrap();

        let sink = MemorySink::new();
        let report = prune_folders(&[gone.clone(), present.clone()], &sink);

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Path does not exist or is not a directory"));
        assert!(!present.exists());
    }

    #[test]
    fn folder_filled_after_scan_is_skipped() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("late.txt"), "arrived after scan").unwrap();

        let sink = MemorySink::new();
        let report = prune_folders(&[target.clone()], &sink);

        assert_eq!(report.succeeded, 0);
        assert_eq!(
            report.errors,
            vec![format!("Folder not empty, skipping: {}", target.display())]
        );
        assert!(target.join("late.txt").exists());
        assert_eq!(sink.count(Level::Warn), 1);
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        let sink = MemorySink::new();
        let report = prune_folders(&[file.clone()], &sink);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.errors.len(), 1);
        assert!(file.exists());
    }
}
