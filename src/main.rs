//! Tag Tidy - batch-renames audio files to match their embedded titles.
//!
//! Walks a directory (optionally recursively), decodes the tags of every
//! file it finds, and renames each file so its name on disk matches the
//! embedded title. Non-audio files and files without a usable title are
//! left alone; a single bad file never aborts the batch.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod renamer;
pub mod sanitize;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version print to stdout and exit 0; actual parse
            // failures exit 1.
            err.print()?;
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Initialize logging. --verbose surfaces the per-file rename and skip
    // diagnostics, which are logged at debug level.
    let default_directive = if args.verbose {
        "tag_tidy=debug"
    } else {
        "tag_tidy=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive(default_directive.parse().unwrap()))
        .init();

    cli::run_command(&args)
}
