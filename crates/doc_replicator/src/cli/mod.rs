/// Clap argument definitions
mod args;

use clap::Parser;

use doc_replicator_core::config::Config;
use doc_replicator_core::error::Result;
use doc_replicator_core::fs::{FileSystem, RealFileSystem};
use doc_replicator_core::replicate::{self, COMPLETION_MESSAGE};

pub use args::Cli;

/// Main entry point for the CLI
pub fn run_cli() {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Paths are relative to the current working directory
    let config = Config::default();

    if let Err(e) = handle_replicate(&RealFileSystem, &config) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

/// Run one replication and print the completion line
fn handle_replicate<FS: FileSystem>(fs: &FS, config: &Config) -> Result<()> {
    let report = replicate::run(fs, config)?;
    log::debug!(
        "{} files written to {:?}, {} stale files removed",
        report.files_written,
        report.output_dir,
        report.removed_entries
    );
    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}
