use crate::count::{
    count_details, count_recursive, count_root_only, format_size, summarize_sizes,
};
use crate::empty::classify_empty;
use crate::flatten::{flatten, ConflictMode};
use crate::prune::prune_folders;
use crate::sink::ActionSink;
use crate::structure::{plan_structure, replicate_structure, scan_structure};
use crate::validate::validate;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

/// Folder maintenance: empty folder cleanup, structure duplication, file counting and flattening
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory that receives the per-run log file
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    /// Echo every logged action to the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find folder structures that contain no files
    Empty {
        /// Folder to scan
        path: String,

        /// Delete the empty folders that were found
        #[arg(short, long)]
        delete: bool,
    },

    /// Recreate the folder structure of SOURCE inside DESTINATION, without files
    Duplicate {
        /// Folder whose structure is copied
        source: String,

        /// Folder that receives the structure; created if missing
        destination: PathBuf,

        /// Only print the folders that would be created
        #[arg(long)]
        dry_run: bool,
    },

    /// Count files directly in a folder and in its whole tree
    Count {
        /// Folder to count
        path: String,

        /// Break the count down by folder and file type
        #[arg(short, long)]
        detailed: bool,

        /// Show file size information
        #[arg(short, long)]
        size: bool,
    },

    /// Move every nested file into the folder itself and delete emptied subfolders
    Flatten {
        /// Folder to flatten
        path: String,

        /// How to handle a file whose name is already taken in the root
        #[arg(short, long, value_enum, default_value_t = ConflictMode::Rename)]
        conflict: ConflictMode,
    },
}

impl Args {
    pub fn log_dir(&self) -> Option<&Path> {
        if self.no_log_file {
            None
        } else {
            Some(&self.log_dir)
        }
    }
}

/// Runs the selected subcommand. Only invalid input is an error; per-item
/// failures are printed and the command still succeeds.
pub fn run(args: &Args, sink: &dyn ActionSink) -> Result<()> {
    match &args.command {
        Command::Empty { path, delete } => run_empty(path, *delete, sink),
        Command::Duplicate {
            source,
            destination,
            dry_run,
        } => run_duplicate(source, destination, *dry_run, sink),
        Command::Count {
            path,
            detailed,
            size,
        } => run_count(path, *detailed, *size, sink),
        Command::Flatten { path, conflict } => run_flatten(path, *conflict, sink),
    }
}

fn validated(input: &str) -> Result<PathBuf> {
    validate(input).with_context(|| format!("Cannot use folder '{}'", input.trim()))
}

fn run_empty(path: &str, delete: bool, sink: &dyn ActionSink) -> Result<()> {
    let root = validated(path)?;

    println!("\nSearching for empty directories in {}...", root.display());
    let empty = classify_empty(&root, sink);
    if empty.is_empty() {
        println!("{}", "No empty folder structures found.".green());
        return Ok(());
    }

    for dir in &empty {
        if *dir == root {
            println!("Found empty directory: {} (root path specified)", dir.display());
        } else {
            println!("Found empty directory: {}", dir.display());
        }
    }
    println!("\nFound {} empty folder(s).", empty.len());

    if !delete {
        println!("Run again with --delete to remove them.");
        return Ok(());
    }

    let report = prune_folders(&empty, sink);
    println!("\nDeletion Summary:");
    println!("  Successfully deleted: {}", report.succeeded);
    println!("  Errors: {}", report.errors.len());
    print_errors(&report.errors);
    Ok(())
}

fn run_duplicate(
    source: &str,
    destination: &Path,
    dry_run: bool,
    sink: &dyn ActionSink,
) -> Result<()> {
    let source = validated(source)?;

    let dirs = scan_structure(&source, sink);
    println!("\nFound {} folder(s) in {}", dirs.len(), source.display());

    if dry_run {
        for target in plan_structure(&dirs, destination) {
            println!("  would create {}", target.display());
        }
        return Ok(());
    }

    let report = replicate_structure(&dirs, destination, sink);
    println!("\nDuplication Summary:");
    println!("  Folders created: {}", report.succeeded);
    println!("  Errors: {}", report.errors.len());
    print_errors(&report.errors);
    Ok(())
}

fn run_count(path: &str, detailed: bool, size: bool, sink: &dyn ActionSink) -> Result<()> {
    let root = validated(path)?;

    println!("\nCounting files in {}...", root.display());
    let root_only = count_root_only(&root, sink);

    let files = if detailed {
        let details = count_details(&root, sink);
        println!("  Files in root folder: {}", root_only);
        println!("  Files in whole tree: {}", details.total_files);
        println!("  Folders: {}", details.total_folders);
        println!("  Empty folders: {}", details.empty_folders.len());
        println!("  Folders with files: {}", details.folders_with_files.len());

        if !details.files_by_type.is_empty() {
            println!("\nFiles by type:");
            let mut by_type: Vec<_> = details.files_by_type.iter().collect();
            by_type.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
            for (ext, count) in by_type.into_iter().take(10) {
                println!("  {:<15}: {:>6} files", ext, count);
            }
        }
        details.files
    } else {
        let (total, files) = count_recursive(&root, sink);
        println!("  Files in root folder: {}", root_only);
        println!("  Files in whole tree: {}", total);
        files
    };

    if size {
        let summary = summarize_sizes(&files);
        println!("\nTotal size: {}", format_size(summary.total_bytes));
        if detailed && !summary.by_type.is_empty() {
            let mut by_size: Vec<_> = summary.by_type.iter().collect();
            by_size.sort_by(|a, b| (b.1).1.cmp(&(a.1).1).then(a.0.cmp(b.0)));
            for (ext, (count, bytes)) in by_size.into_iter().take(10) {
                println!(
                    "  {:<15}: {:>8} ({} files, avg: {})",
                    ext,
                    format_size(*bytes),
                    count,
                    format_size(bytes / *count as u64)
                );
            }
        }
    }
    Ok(())
}

fn run_flatten(path: &str, conflict: ConflictMode, sink: &dyn ActionSink) -> Result<()> {
    let root = validated(path)?;

    println!("\nFlattening {}...", root.display());
    let result = flatten(&root, conflict, sink);
    println!("\nFlatten Summary:");
    println!("  Files moved: {}", result.moved);
    println!("  Skipped (name conflict): {}", result.skipped_conflicts);
    println!("  Folders removed: {}", result.removed_folders);
    println!("  Errors: {}", result.errors.len());
    print_errors(&result.errors);
    Ok(())
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!("\nProblems:");
    for error in errors {
        println!("  - {}", error.red());
    }
}
