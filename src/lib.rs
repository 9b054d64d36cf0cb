//! folder-tidy: finding and removing empty folder trees, duplicating folder
//! skeletons, counting files and flattening nested folders.
//!
//! Every operation is a synchronous function that reports what it did through
//! an [`ActionSink`]. Batch operations never fail as a whole because of one
//! bad item; they return a report carrying the per-item errors.

pub mod cli;
pub mod count;
pub mod empty;
pub mod flatten;
mod fs_util;
pub mod logging;
pub mod prune;
pub mod report;
pub mod sink;
pub mod structure;
pub mod validate;

pub use count::{
    count_details, count_recursive, count_root_only, format_size, summarize_sizes, CountDetails,
    SizeSummary,
};
pub use empty::classify_empty;
pub use flatten::{flatten, ConflictMode, FlattenResult};
pub use prune::prune_folders;
pub use report::BatchReport;
pub use sink::{ActionSink, LogSink, MemorySink};
pub use structure::{plan_structure, replicate_structure, scan_structure};
pub use validate::{validate, ValidationError};
