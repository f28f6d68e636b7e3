//! Command-line interface for tag-tidy.

mod commands;

pub use commands::{Cli, run_command};
