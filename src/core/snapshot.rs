//! Read-only render handoff.
//!
//! Once per frame the session writes its state into a [`GameSnapshot`];
//! the view layer draws from that and never touches live game state.

use crate::core::piece::{Piece, Shape, SHAPES};
use crate::types::{Cell, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceView {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// The lookahead piece; it has no well position yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecePreview {
    pub shape: Shape,
    pub color: PieceColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: PieceView,
    pub next: PiecePreview,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: PieceView {
                shape: SHAPES[0],
                color: PieceColor::Cyan,
                x: 0,
                y: 0,
            },
            next: PiecePreview {
                shape: SHAPES[0],
                color: PieceColor::Cyan,
            },
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
