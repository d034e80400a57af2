//! Error types for frame loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an animation.
///
/// All variants are fatal: a missing or unreadable frame source is a
/// configuration error, not a transient condition, so no caller retries.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A frame source could not be opened or read.
    #[error("failed to read frame {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The animation directory is missing or inaccessible.
    #[error("cannot read animation directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The animation directory contains no frame files.
    #[error("no animation frames found in {path}")]
    EmptyDirectory { path: PathBuf },
}
