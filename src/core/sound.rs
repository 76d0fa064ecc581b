//! Sound collaborator seam.
//!
//! The core emits three fire-and-forget notifications; a backend decides
//! what they sound like. Nothing is returned and nothing can fail from the
//! core's point of view.

pub trait SoundSink {
    /// A piece just locked into the board.
    fn play_place(&mut self);
    /// One or more rows were cleared.
    fn play_clear(&mut self);
    /// The session ended with a blocked spawn.
    fn play_game_over(&mut self);
}

/// Discards every notification. Used by tests and headless callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSounds;

impl SoundSink for NullSounds {
    fn play_place(&mut self) {}
    fn play_clear(&mut self) {}
    fn play_game_over(&mut self) {}
}
