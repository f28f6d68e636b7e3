//! CLI argument definitions and the top-level command handler.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::metadata::LoftyTagSource;
use crate::renamer::{self, RunConfig};
use crate::sanitize::Platform;

/// Rename audio files so their names match their embedded titles
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory containing the audio files
    #[arg(short, long)]
    pub directory: PathBuf,

    /// Recursively target subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Run, but do not rename. Useful for testing when combined with verbose
    #[arg(short, long)]
    pub noop: bool,

    /// Show each computed rename and each skip reason
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the rename batch described by the parsed arguments.
///
/// Only a failure to list the base directory is an error here; per-file
/// problems are logged by the renamer and never change the exit status.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = RunConfig {
        directory: cli.directory.clone(),
        recursive: cli.recursive,
        dry_run: cli.noop,
        platform: Platform::host(),
    };

    let summary = renamer::run(&config, &LoftyTagSource)?;
    info!(
        "done: {} renamed, {} skipped",
        summary.renamed, summary.skipped
    );
    Ok(())
}
