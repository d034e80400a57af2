//! End-to-end playback tests over the capturing surface.

use flipbook_core::{Frame, FrameSequence, FRAME_HEIGHT, FRAME_WIDTH};
use flipbook_terminal::{CaptureSurface, DiffRenderer, Player};
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn frame_of(text: &str) -> Frame {
    Frame::from_reader(Cursor::new(text)).expect("in-memory read cannot fail")
}

#[test]
fn replaying_captured_writes_reproduces_the_frame() {
    let target = frame_of("  ##  \n #  # \n  ##  \n");
    let mut renderer = DiffRenderer::new();
    let mut surface = CaptureSurface::new();

    renderer
        .render(&Frame::blank(), &target, &mut surface)
        .expect("capture surface cannot fail");

    // Apply the writes to an in-memory grid and compare against the frame.
    let mut grid = vec![vec![' '; FRAME_WIDTH]; FRAME_HEIGHT];
    for &(row, col, ch) in surface.writes() {
        grid[row as usize][col as usize] = ch;
    }
    for row in 0..FRAME_HEIGHT {
        let line: String = grid[row].iter().collect();
        assert_eq!(line, target.row_text(row), "row {row} mismatch");
    }
}

#[test]
fn playback_converges_to_each_frame_in_turn() {
    let frames = vec![frame_of("aa\n"), frame_of("bb\n"), frame_of("cc\n")];
    let sequence = FrameSequence::from_frames(frames.clone()).expect("non-empty");
    let stop = Arc::new(AtomicBool::new(false));
    let mut player = Player::new(sequence, Duration::ZERO, stop);
    let mut surface = CaptureSurface::new();

    let mut grid = vec![vec![' '; FRAME_WIDTH]; FRAME_HEIGHT];
    for expected in &frames {
        let before = surface.writes().len();
        player.tick(&mut surface);
        for &(row, col, ch) in &surface.writes()[before..] {
            grid[row as usize][col as usize] = ch;
        }
        for row in 0..FRAME_HEIGHT {
            let line: String = grid[row].iter().collect();
            assert_eq!(line, expected.row_text(row));
        }
    }
}

#[test]
fn stop_flag_ends_run_after_at_most_one_tick() {
    let frames = vec![frame_of("x\n"), frame_of("y\n")];
    let sequence = FrameSequence::from_frames(frames).expect("non-empty");
    let stop = Arc::new(AtomicBool::new(false));
    stop.store(true, Ordering::Relaxed);

    let mut player = Player::new(sequence, Duration::from_millis(1), Arc::clone(&stop));
    let mut surface = CaptureSurface::new();
    player.run(&mut surface).expect("clean exit");

    assert!(surface.was_left());
    assert!(surface.writes().is_empty());
}

#[test]
fn surface_is_restored_even_without_any_tick() {
    let sequence = FrameSequence::from_frames(vec![Frame::blank()]).expect("non-empty");
    let stop = Arc::new(AtomicBool::new(true));
    let mut player = Player::new(sequence, Duration::ZERO, stop);
    let mut surface = CaptureSurface::new();

    player.run(&mut surface).expect("clean exit");
    assert!(surface.is_entered());
    assert!(surface.was_left());
}
