//! Terminal rendering module.
//!
//! Renders into a simple styled-character framebuffer that a crossterm
//! backend flushes to the real terminal. The view layer only ever sees a
//! [`crate::core::GameSnapshot`], so `core` stays deterministic and
//! testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
