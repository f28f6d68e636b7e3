//! Directory walking and batch renaming.
//!
//! Walks the configured directory depth-first, decodes each file's tags, and
//! renames the file so its stem matches the sanitized title. Every per-file
//! failure is logged and skipped; only a failure to list the base directory
//! aborts the run.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::metadata::TagSource;
use crate::sanitize::{self, Platform};

/// Immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base directory to scan.
    pub directory: PathBuf,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Compute and log renames without applying them.
    pub dry_run: bool,
    /// Sanitization rules to apply.
    pub platform: Platform,
}

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files renamed, or in dry-run mode, files that would have been.
    pub renamed: usize,
    /// Files left alone: unreadable, not audio, no usable title, or a
    /// rename the filesystem refused.
    pub skipped: usize,
}

/// The (original, new) path pair computed for one file. Ephemeral: executed
/// or logged within its iteration, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenamePlan {
    original: PathBuf,
    new: PathBuf,
}

impl RenamePlan {
    /// Builds the plan for one file: the sanitized title becomes the stem,
    /// the original extension is carried over verbatim, and the file stays
    /// in its containing directory.
    fn new(path: &Path, dir: &Path, title: &str, platform: Platform) -> Self {
        let mut file_name = OsString::from(sanitize::sanitize(title, platform));
        if let Some(ext) = path.extension() {
            file_name.push(".");
            file_name.push(ext);
        }
        Self {
            original: path.to_path_buf(),
            new: dir.join(file_name),
        }
    }
}

/// Renames every titled audio file under the configured directory.
///
/// Fails only when the base directory itself cannot be listed.
pub fn run<S: TagSource>(config: &RunConfig, tags: &S) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    rename_dir(&config.directory, config, tags, &mut summary)?;
    Ok(summary)
}

fn rename_dir<S: TagSource>(
    dir: &Path,
    config: &RunConfig,
    tags: &S,
    summary: &mut RunSummary,
) -> Result<()> {
    let read = fs::read_dir(dir).map_err(|e| Error::list_dir(dir, e))?;

    // Snapshot and sort the listing before renaming anything in it, so a
    // renamed file cannot reappear later in the same iteration
    let mut entries: Vec<_> = read.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            if config.recursive {
                // A failing subdirectory never aborts its siblings
                if let Err(err) = rename_dir(&path, config, tags, summary) {
                    warn!("skipping subdirectory: {}", err);
                }
            }
            continue;
        }

        process_file(&path, dir, config, tags, summary);
    }

    Ok(())
}

/// Handles one regular file. Every failure path here is terminal for the
/// file and silent for the batch.
fn process_file<S: TagSource>(
    path: &Path,
    dir: &Path,
    config: &RunConfig,
    tags: &S,
    summary: &mut RunSummary,
) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("cannot read {}: {}", path.display(), err);
            summary.skipped += 1;
            return;
        }
    };

    let decoded = match tags.read_tags(&bytes) {
        Ok(decoded) => decoded,
        Err(_) => {
            // Assume the file is not an audio file
            debug!("skipping {}: not a recognized audio format", path.display());
            summary.skipped += 1;
            return;
        }
    };

    let Some(title) = decoded.title.filter(|t| !t.is_empty()) else {
        debug!("skipping {}: no usable title", path.display());
        summary.skipped += 1;
        return;
    };

    let plan = RenamePlan::new(path, dir, &title, config.platform);
    debug!(
        "renaming \"{}\" to \"{}\"",
        plan.original.display(),
        plan.new.display()
    );

    if config.dry_run {
        summary.renamed += 1;
        return;
    }

    match rename_file(&plan) {
        Ok(()) => summary.renamed += 1,
        Err(err) => {
            warn!("{}", err);
            summary.skipped += 1;
        }
    }
}

fn rename_file(plan: &RenamePlan) -> Result<()> {
    fs::rename(&plan.original, &plan.new).map_err(|e| Error::rename(&plan.original, &plan.new, e))
}
