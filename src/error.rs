//! Application-wide error types.
//!
//! Library modules use a specific error enum via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! Only the failure to list the target directory ever escapes the renamer;
//! every per-file condition is handled (and at most logged) where it occurs.

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory whose contents could not be listed
    #[error("cannot list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes that are not a recognized tagged-audio format
    #[error("unrecognized audio format: {0}")]
    UnrecognizedFormat(#[from] lofty::error::LoftyError),

    /// A rename the filesystem refused
    #[error("cannot rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a directory listing error.
    pub fn list_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ListDir {
            path: path.into(),
            source,
        }
    }

    /// Create a rename error.
    pub fn rename(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Rename {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
