//! Fixed-size character grid representing one terminal screen.

use crate::error::LoadError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Frame width in columns.
pub const FRAME_WIDTH: usize = 80;

/// Frame height in rows.
pub const FRAME_HEIGHT: usize = 24;

/// A fixed [`FRAME_HEIGHT`] × [`FRAME_WIDTH`] character grid.
///
/// Every row holds exactly [`FRAME_WIDTH`] cells; the constructors enforce
/// this by padding short lines with spaces and truncating long ones, so a
/// malformed row is unrepresentable. Frames are immutable once built and
/// only read during playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Row-major cell storage, `FRAME_WIDTH * FRAME_HEIGHT` long.
    cells: Vec<char>,
}

impl Frame {
    /// Create an all-space frame.
    ///
    /// The playback loop diffs the first real frame against this, so the
    /// opening frame is drawn in full on a cleared screen.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            cells: vec![' '; FRAME_WIDTH * FRAME_HEIGHT],
        }
    }

    /// Read a frame from a text source.
    ///
    /// Reads up to [`FRAME_HEIGHT`] lines. Trailing LF, CR, and CRLF
    /// terminators are stripped regardless of style; each line fills its
    /// row left-aligned, padded with spaces, truncated at [`FRAME_WIDTH`]
    /// columns. A source with fewer lines (or none at all) leaves the
    /// remaining rows blank — an empty source is a valid all-space frame.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut cells = vec![' '; FRAME_WIDTH * FRAME_HEIGHT];
        let mut line = String::new();

        for row in 0..FRAME_HEIGHT {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim_end_matches(['\n', '\r']);

            let mut chars = text.chars();
            for (col, ch) in chars.by_ref().take(FRAME_WIDTH).enumerate() {
                cells[row * FRAME_WIDTH + col] = ch;
            }
            if chars.next().is_some() {
                // Intentional resource bound, but observable.
                warn!(row, width = FRAME_WIDTH, "line exceeds frame width, truncated");
            }
        }

        Ok(Self { cells })
    }

    /// Read a frame from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] naming the path if the file cannot be
    /// opened or read; no partial frame is produced.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the character at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `row >= FRAME_HEIGHT` or `col >= FRAME_WIDTH`.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> char {
        assert!(row < FRAME_HEIGHT && col < FRAME_WIDTH, "cell out of bounds");
        self.cells[row * FRAME_WIDTH + col]
    }

    /// Get one row as a string of exactly [`FRAME_WIDTH`] characters.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * FRAME_WIDTH..(row + 1) * FRAME_WIDTH]
            .iter()
            .collect()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}
