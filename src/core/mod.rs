//! Core module - pure game logic with no I/O dependencies
//!
//! Everything here is deterministic given its inputs plus the injected
//! RNG: board rules, piece geometry, scoring, and the session controller.

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod sound;

// Re-export commonly used types
pub use board::Board;
pub use piece::{rotate_cw, Piece, Shape, SHAPES};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snapshot::{GameSnapshot, PiecePreview, PieceView};
pub use sound::{NullSounds, SoundSink};
