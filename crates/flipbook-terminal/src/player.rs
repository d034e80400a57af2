//! Playback loop: cycle a frame sequence until told to stop.

use crate::error::SurfaceError;
use crate::renderer::DiffRenderer;
use crate::surface::TerminalSurface;
use flipbook_core::{Frame, FrameSequence};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Default per-tick delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Loops a [`FrameSequence`] on a terminal surface.
///
/// The player owns the sequence and renderer for its whole lifetime. The
/// stop flag is shared context handed in at construction — typically the
/// flag a signal handler raises — and is polled once per tick, after the
/// in-flight render completes. Frames are immutable, so the flag is the
/// only cross-thread state.
pub struct Player {
    sequence: FrameSequence,
    renderer: DiffRenderer,
    delay: Duration,
    stop: Arc<AtomicBool>,
    /// Index of the next frame to display.
    cursor: usize,
    /// Index of the frame currently on screen; `None` before the first
    /// tick, when the screen is blank.
    displayed: Option<usize>,
    blank: Frame,
}

impl Player {
    /// Create a player over a non-empty sequence.
    #[must_use]
    pub fn new(sequence: FrameSequence, delay: Duration, stop: Arc<AtomicBool>) -> Self {
        Self {
            sequence,
            renderer: DiffRenderer::new(),
            delay,
            stop,
            cursor: 0,
            displayed: None,
            blank: Frame::blank(),
        }
    }

    /// Number of frames in the loop.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// Whether a stop has been requested.
    #[must_use]
    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Display the next frame and advance the playback cursor.
    ///
    /// Renders differentially against whatever is on screen (a blank
    /// screen before the first tick). Write failures are logged and
    /// swallowed: display is best-effort and only a stop request ends
    /// playback. Returns the index of the frame just displayed.
    pub fn tick<S: TerminalSurface>(&mut self, surface: &mut S) -> usize {
        let index = self.cursor;
        let current = &self.sequence.frames()[index];
        let previous = match self.displayed {
            Some(i) => &self.sequence.frames()[i],
            None => &self.blank,
        };

        if let Err(err) = self.renderer.render(previous, current, surface) {
            debug!(frame = index, error = %err, "frame write failed, continuing");
        }

        self.displayed = Some(index);
        self.cursor = (index + 1) % self.sequence.len();
        index
    }

    /// Run the playback loop until the stop flag is raised.
    ///
    /// Enters the surface, ticks with the fixed delay between frames, and
    /// restores the surface on the way out. The flag is re-checked at the
    /// start of each tick, so a stop request is honored after at most one
    /// more tick. Sleep happens only between ticks; nothing suspends
    /// mid-tick.
    ///
    /// # Errors
    ///
    /// Only surface setup can fail; the loop itself is best-effort.
    pub fn run<S: TerminalSurface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.enter()?;
        self.renderer.reset();
        self.displayed = None;

        while !self.stop_requested() {
            self.tick(surface);
            thread::sleep(self.delay);
        }

        debug!("stop requested, leaving playback");
        surface.leave()
    }
}
