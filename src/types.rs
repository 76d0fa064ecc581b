//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Render/input loop pacing (~30 Hz)
pub const FRAME_MS: u32 = 33;

/// Gravity cadence: base interval at level 1 and the per-level speedup.
pub const BASE_DROP_MS: u32 = 500;
pub const DROP_STEP_MS: u32 = 50;
/// The formula `500 - (level-1)*50` hits zero at level 11; the interval is
/// floored here instead, so level 10 is the terminal speed.
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// How long the final frame stays up after game over, so the game-over
/// sound can finish before the process exits.
pub const GAME_OVER_HOLD_MS: u64 = 2000;

/// A single lock can complete at most this many rows (tetromino geometry).
pub const MAX_CLEAR_ROWS: usize = 4;

/// Line clear scoring, indexed by rows cleared in one lock event.
pub const LINE_SCORES: [u32; MAX_CLEAR_ROWS + 1] = [0, 40, 100, 300, 1200];

/// Settled-piece palette. Shape and color are drawn independently, so the
/// color carries no gameplay meaning beyond rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Red,
    Green,
    Blue,
    Purple,
    Orange,
}

impl PieceColor {
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Purple,
        PieceColor::Orange,
    ];

    /// Palette RGB values. The renderer maps these onto terminal colors;
    /// the table itself is core data.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 255, 255),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Red => (255, 0, 0),
            PieceColor::Green => (0, 255, 0),
            PieceColor::Blue => (0, 0, 255),
            PieceColor::Purple => (128, 0, 128),
            PieceColor::Orange => (255, 165, 0),
        }
    }
}

/// Cell on the board (None = empty, Some = settled color)
pub type Cell = Option<PieceColor>;

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Down,
    Up,
    PauseToggle,
}

/// Discrete input events, polled once per frame in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key(GameKey),
}

/// Controller phases. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}
