//! Differential renderer for minimal terminal I/O.
//!
//! Compares two frames cell by cell in row-major order and writes only
//! the cells that changed, so output cost is proportional to the number
//! of changed cells rather than the full grid. Tracks the cursor to skip
//! redundant moves: a run of consecutive changed cells on one row needs
//! a single cursor move.

use crate::error::SurfaceError;
use crate::surface::TerminalSurface;
use flipbook_core::{Frame, FRAME_HEIGHT, FRAME_WIDTH};

/// Cursor position sentinel: location unknown.
const UNKNOWN: u16 = u16::MAX;

/// Emits the minimal cell writes to turn one displayed frame into another.
#[derive(Debug)]
pub struct DiffRenderer {
    /// Last known cursor position (`UNKNOWN` after reset or row overflow).
    cursor_row: u16,
    cursor_col: u16,
    /// Statistics: cells written in the last render.
    cells_written: usize,
    /// Statistics: cursor moves in the last render.
    cursor_moves: usize,
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor_row: UNKNOWN,
            cursor_col: UNKNOWN,
            cells_written: 0,
            cursor_moves: 0,
        }
    }

    /// Forget the tracked cursor position (call after the screen is
    /// cleared or the session restarts).
    pub fn reset(&mut self) {
        self.cursor_row = UNKNOWN;
        self.cursor_col = UNKNOWN;
        self.cells_written = 0;
        self.cursor_moves = 0;
    }

    /// Cells written by the last render.
    #[must_use]
    pub fn cells_written(&self) -> usize {
        self.cells_written
    }

    /// Cursor moves emitted by the last render.
    #[must_use]
    pub fn cursor_moves(&self) -> usize {
        self.cursor_moves
    }

    /// Write the cells where `current` differs from `previous`.
    ///
    /// After this returns, a surface that displayed `previous` displays
    /// `current`. Identical frames emit zero writes. Output is flushed
    /// once at the end.
    ///
    /// Returns the number of cells written.
    pub fn render<S: TerminalSurface>(
        &mut self,
        previous: &Frame,
        current: &Frame,
        surface: &mut S,
    ) -> Result<usize, SurfaceError> {
        self.cells_written = 0;
        self.cursor_moves = 0;

        for row in 0..FRAME_HEIGHT {
            for col in 0..FRAME_WIDTH {
                let ch = current.cell(row, col);
                if ch == previous.cell(row, col) {
                    continue;
                }

                let (r, c) = (row as u16, col as u16);
                if self.cursor_row != r || self.cursor_col != c {
                    surface.move_to(r, c)?;
                    self.cursor_moves += 1;
                }
                surface.print_char(ch)?;

                // The write advances the cursor one column; past the last
                // column the position depends on the terminal, so forget it.
                self.cursor_row = r;
                self.cursor_col = c + 1;
                if usize::from(self.cursor_col) >= FRAME_WIDTH {
                    self.cursor_row = UNKNOWN;
                    self.cursor_col = UNKNOWN;
                }

                self.cells_written += 1;
            }
        }

        surface.flush()?;
        Ok(self.cells_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CaptureSurface;
    use std::io::Cursor;

    fn frame_of(input: &str) -> Frame {
        Frame::from_reader(Cursor::new(input)).expect("in-memory read cannot fail")
    }

    #[test]
    fn test_identical_frames_emit_zero_writes() {
        let frame = frame_of("hello\nworld\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        let written = renderer.render(&frame, &frame, &mut surface).unwrap();
        assert_eq!(written, 0);
        assert!(surface.writes().is_empty());
    }

    #[test]
    fn test_single_cell_change_emits_single_write() {
        let previous = frame_of("abc\n");
        let current = frame_of("aXc\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        let written = renderer.render(&previous, &current, &mut surface).unwrap();
        assert_eq!(written, 1);
        assert_eq!(surface.writes(), &[(0, 1, 'X')]);
    }

    #[test]
    fn test_blank_baseline_draws_frame_in_full() {
        let current = frame_of("ab\ncd\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        let written = renderer
            .render(&Frame::blank(), &current, &mut surface)
            .unwrap();
        // Only the non-space cells differ from the blank baseline.
        assert_eq!(written, 4);
        assert_eq!(
            surface.writes(),
            &[(0, 0, 'a'), (0, 1, 'b'), (1, 0, 'c'), (1, 1, 'd')]
        );
    }

    #[test]
    fn test_cell_cleared_back_to_space_is_written() {
        let previous = frame_of("xyz\n");
        let current = frame_of("x z\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&previous, &current, &mut surface).unwrap();
        assert_eq!(surface.writes(), &[(0, 1, ' ')]);
    }

    #[test]
    fn test_adjacent_changes_need_one_cursor_move() {
        let previous = frame_of("....\n");
        let current = frame_of(".ab.\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&previous, &current, &mut surface).unwrap();
        assert_eq!(renderer.cells_written(), 2);
        assert_eq!(renderer.cursor_moves(), 1);
        assert_eq!(surface.writes(), &[(0, 1, 'a'), (0, 2, 'b')]);
    }

    #[test]
    fn test_scattered_changes_move_per_run() {
        let previous = Frame::blank();
        let current = frame_of("a\n\nb\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&previous, &current, &mut surface).unwrap();
        assert_eq!(renderer.cursor_moves(), 2);
        assert_eq!(surface.writes(), &[(0, 0, 'a'), (2, 0, 'b')]);
    }

    #[test]
    fn test_writes_are_row_major_ordered() {
        let previous = Frame::blank();
        let current = frame_of("b a\nc\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&previous, &current, &mut surface).unwrap();
        let positions: Vec<(u16, u16)> =
            surface.writes().iter().map(|&(r, c, _)| (r, c)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_change_in_last_column_forgets_cursor() {
        let mut line = " ".repeat(FRAME_WIDTH - 1);
        line.push('E');
        let current = frame_of(&format!("{line}\nF\n"));
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&Frame::blank(), &current, &mut surface).unwrap();
        // Last-column write, then the next row needs an explicit move.
        assert_eq!(renderer.cursor_moves(), 2);
        assert_eq!(
            surface.writes(),
            &[(0, (FRAME_WIDTH - 1) as u16, 'E'), (1, 0, 'F')]
        );
    }

    #[test]
    fn test_render_flushes_once() {
        let frame = frame_of("x\n");
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();

        renderer.render(&Frame::blank(), &frame, &mut surface).unwrap();
        assert_eq!(surface.flushes(), 1);
    }

    #[test]
    fn test_reset_clears_statistics() {
        let mut renderer = DiffRenderer::new();
        let mut surface = CaptureSurface::new();
        renderer
            .render(&Frame::blank(), &frame_of("x\n"), &mut surface)
            .unwrap();
        assert_eq!(renderer.cells_written(), 1);

        renderer.reset();
        assert_eq!(renderer.cells_written(), 0);
        assert_eq!(renderer.cursor_moves(), 0);
    }
}
