//! Ordered, bounded sets of animation frames.

use crate::error::LoadError;
use crate::frame::Frame;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Upper bound on the number of frames in one animation.
///
/// Directories with more qualifying entries are truncated to the first
/// `MAX_FRAMES` in sort order; the overflow is logged, not an error.
pub const MAX_FRAMES: usize = 20;

/// An ordered, non-empty list of frames making up one animation loop.
///
/// Order is byte-wise lexicographic on file name, so `frame10` sorts
/// before `frame2`. A sequence of zero frames cannot be constructed: an
/// empty directory is a load failure, not an empty animation.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Build a sequence from already-loaded frames.
    ///
    /// Returns `None` if `frames` is empty; the non-empty invariant is
    /// established here and holds for the life of the sequence.
    #[must_use]
    pub fn from_frames(frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    /// Load every frame file in `dir`, ordered by file name.
    ///
    /// Entries whose name starts with a dot are skipped. Remaining names
    /// are sorted byte-wise lexicographically, capped at [`MAX_FRAMES`]
    /// (overflow logged at WARN), and loaded in order. The first frame
    /// that fails to load aborts the whole operation; no partial sequence
    /// is ever returned.
    ///
    /// # Errors
    ///
    /// [`LoadError::DirectoryUnreadable`] if `dir` cannot be enumerated,
    /// [`LoadError::EmptyDirectory`] if no qualifying entries remain, and
    /// [`LoadError::Io`] naming the first frame file that failed.
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        let entries = fs::read_dir(dir).map_err(|source| LoadError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names: Vec<OsString> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name();
            if name.as_encoded_bytes().first() == Some(&b'.') {
                continue;
            }
            names.push(name);
        }

        if names.is_empty() {
            return Err(LoadError::EmptyDirectory {
                path: dir.to_path_buf(),
            });
        }

        // OsString ordering is byte-wise, which is exactly the contract:
        // "frame10" sorts before "frame2".
        names.sort_unstable();

        if names.len() > MAX_FRAMES {
            warn!(
                total = names.len(),
                kept = MAX_FRAMES,
                "too many frame files, keeping the first {MAX_FRAMES} in sort order"
            );
            names.truncate(MAX_FRAMES);
        }

        let mut frames = Vec::with_capacity(names.len());
        for name in &names {
            let path: PathBuf = dir.join(name);
            frames.push(Frame::from_path(&path)?);
        }
        debug!(count = frames.len(), dir = %dir.display(), "animation loaded");

        Ok(Self { frames })
    }

    /// Number of frames in the sequence (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for iterator-style call sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All frames, in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}
