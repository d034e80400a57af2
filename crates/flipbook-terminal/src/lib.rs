//! # flipbook-terminal
//!
//! Terminal surface and differential playback for the flipbook animation
//! player.
//!
//! The crate has three pieces:
//!
//! - [`TerminalSurface`] — the cursor-addressed output capability, with a
//!   real crossterm backend ([`CrosstermSurface`]) and a capturing backend
//!   for tests ([`CaptureSurface`]).
//! - [`DiffRenderer`] — emits the minimal cell writes to turn the displayed
//!   previous frame into the current one.
//! - [`Player`] — the tick loop that cycles a frame sequence until a stop
//!   flag is raised.

mod error;
mod player;
mod renderer;
mod surface;

pub use error::SurfaceError;
pub use player::{Player, DEFAULT_DELAY_MS};
pub use renderer::DiffRenderer;
pub use surface::{CaptureSurface, CrosstermSurface, TerminalSurface};
