//! # flipbook-core
//!
//! Frame data model and loading for the flipbook terminal animation player.
//!
//! An animation is a directory of plain text files, one file per frame.
//! Each file is normalized into a fixed 80×24 character grid ([`Frame`]),
//! and the files are ordered byte-wise lexicographically by name into a
//! non-empty [`FrameSequence`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use flipbook_core::FrameSequence;
//!
//! let sequence = FrameSequence::load_dir("anim".as_ref())?;
//! for frame in sequence.frames() {
//!     // render frame
//! }
//! ```

mod error;
mod frame;
mod sequence;

pub use error::LoadError;
pub use frame::{Frame, FRAME_HEIGHT, FRAME_WIDTH};
pub use sequence::{FrameSequence, MAX_FRAMES};
