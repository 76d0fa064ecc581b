//! blockfall: a terminal falling-block puzzle game.
//!
//! `core` holds the deterministic game rules; `input`, `term`, and `audio`
//! are the collaborators the binary wires together around the 30 Hz frame
//! loop.

pub mod audio;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
