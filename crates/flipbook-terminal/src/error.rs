//! Error types for terminal output.

use thiserror::Error;

/// Errors from the terminal surface.
///
/// Only setup and teardown propagate these; per-cell writes during
/// playback are best-effort and never abort the loop.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// IO error from terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
