//! Process-wide log setup: one timestamped file per run plus terminal echo.

use anyhow::{Context, Result};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const LOG_FILE_PREFIX: &str = "folder_tidy_";

/// `folder_tidy_YYYYMMDD_HHMMSS.log` for the current local time.
pub fn log_file_name() -> String {
    format!(
        "{}{}.log",
        LOG_FILE_PREFIX,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Terminal echo level. Without `verbose` nothing is echoed: per-item
/// problems already appear once in each command's summary.
pub fn terminal_level(verbose: bool) -> Option<LevelFilter> {
    verbose.then_some(LevelFilter::Info)
}

/// Installs the global logger. Must be called at most once per process.
///
/// With `verbose`, every record from info up is echoed to stderr. When
/// `log_dir` is given, every info-or-higher record is also appended to a
/// fresh file inside it, whose path is returned.
pub fn init(log_dir: Option<&Path>, verbose: bool) -> Result<Option<PathBuf>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if let Some(level) = terminal_level(verbose) {
        let config = ConfigBuilder::new()
            .set_time_level(LevelFilter::Off)
            .build();
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let log_path = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let path = dir.join(log_file_name());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let file_config = ConfigBuilder::new()
                .set_time_level(LevelFilter::Trace)
                .set_time_format_rfc3339()
                .build();
            loggers.push(WriteLogger::new(LevelFilter::Info, file_config, file));
            Some(path)
        }
        None => None,
    };

    CombinedLogger::init(loggers).context("Logger already initialized")?;
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_echo_only_when_verbose() {
        assert_eq!(terminal_level(false), None);
        assert_eq!(terminal_level(true), Some(LevelFilter::Info));
    }

    #[test]
    fn log_file_name_is_timestamped() {
        let name = log_file_name();
        assert!(name.starts_with(LOG_FILE_PREFIX));
        assert!(name.ends_with(".log"));
        // prefix + YYYYMMDD_HHMMSS + .log
        assert_eq!(name.len(), LOG_FILE_PREFIX.len() + 15 + 4);
        assert_eq!(name.as_bytes()[LOG_FILE_PREFIX.len() + 8], b'_');
    }
}
