mod common;

use clap::Parser;
use common::*;
use folder_tidy::cli::{run, Args};
use folder_tidy::MemorySink;
use std::path::PathBuf;

fn args(rest: &[&str]) -> Args {
    let mut argv = vec!["folder-tidy", "--no-log-file"];
    argv.extend_from_slice(rest);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn empty_without_delete_only_reports() {
    let tmp = tree();
    let hollow = dir(tmp.path(), "hollow/inner");
    file(tmp.path(), "keep.txt", "x");
    let root = tmp.path().to_str().unwrap();

    let sink = MemorySink::new();
    run(&args(&["empty", root]), &sink).unwrap();
    assert!(hollow.exists());
    assert!(sink.records().is_empty());
}

#[test]
fn empty_with_delete_prunes() {
    let tmp = tree();
    dir(tmp.path(), "hollow/inner");
    file(tmp.path(), "keep.txt", "x");
    let root = tmp.path().to_str().unwrap();

    let sink = MemorySink::new();
    run(&args(&["empty", root, "--delete"]), &sink).unwrap();
    assert!(relative_dirs(tmp.path()).is_empty());
    assert_eq!(relative_files(tmp.path()), vec![PathBuf::from("keep.txt")]);
}

#[test]
fn duplicate_dry_run_creates_nothing() {
    let tmp = tree();
    let src = dir(tmp.path(), "src");
    dir(&src, "a/b");
    let dest = tmp.path().join("dest");

    let sink = MemorySink::new();
    run(
        &args(&["duplicate", src.to_str().unwrap(), dest.to_str().unwrap(), "--dry-run"]),
        &sink,
    )
    .unwrap();
    assert!(!dest.exists());

    run(
        &args(&["duplicate", src.to_str().unwrap(), dest.to_str().unwrap()]),
        &sink,
    )
    .unwrap();
    assert!(dest.join("src").join("a").join("b").is_dir());
}

#[test]
fn flatten_subcommand_moves_files() {
    let tmp = tree();
    file(tmp.path(), "deep/down/song.mp3", "la");
    let root = tmp.path().to_str().unwrap();

    let sink = MemorySink::new();
    run(&args(&["flatten", root, "--conflict", "skip"]), &sink).unwrap();
    assert_eq!(relative_files(tmp.path()), vec![PathBuf::from("song.mp3")]);
    assert!(relative_dirs(tmp.path()).is_empty());
}

#[test]
fn count_runs_with_every_option() {
    let tmp = tree();
    file(tmp.path(), "a.txt", "a");
    file(tmp.path(), "sub/b.rs", "bb");
    let root = tmp.path().to_str().unwrap();

    let sink = MemorySink::new();
    run(&args(&["count", root]), &sink).unwrap();
    run(&args(&["count", root, "--detailed", "--size"]), &sink).unwrap();
}

#[test]
fn invalid_folder_is_an_error() {
    let tmp = tree();
    let missing = tmp.path().join("missing");

    let sink = MemorySink::new();
    let err = run(&args(&["count", missing.to_str().unwrap()]), &sink).unwrap_err();
    assert!(format!("{err:#}").contains("Path does not exist"));
}
