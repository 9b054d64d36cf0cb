use anyhow::Result;
use clap::Parser;
use folder_tidy::cli::{self, Args};
use folder_tidy::{logging, LogSink};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_file) = logging::init(args.log_dir(), args.verbose)? {
        log::info!("Logging to {}", log_file.display());
    }

    cli::run(&args, &LogSink)
}
