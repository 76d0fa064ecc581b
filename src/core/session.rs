//! Game session - the controller state machine
//!
//! Owns the board, the active and next pieces, the RNG, and the
//! score/level/lines progression. Input application and gravity both go
//! through collide-and-revert against the board; locking is the only path
//! that mutates the grid, and it always runs merge -> clear -> promote ->
//! spawn in that order.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::core::snapshot::{GameSnapshot, PiecePreview, PieceView};
use crate::core::sound::SoundSink;
use crate::types::{GameKey, Phase};

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Piece,
    next: Piece,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    /// Wall-clock milliseconds accumulated since the last gravity step.
    drop_timer_ms: u32,
}

impl GameSession {
    /// Start a fresh session: empty board, score 0, level 1, and an
    /// active/next pair drawn from the seeded RNG.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);
        Self {
            board: Board::new(),
            active,
            next,
            rng,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            drop_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Apply one key event. Returns whether it changed anything.
    ///
    /// The pause toggle works in both Running and Paused; every other key
    /// is ignored while paused, and everything is ignored after game over.
    pub fn handle_key(&mut self, key: GameKey) -> bool {
        if self.game_over {
            return false;
        }
        match key {
            GameKey::PauseToggle => {
                self.paused = !self.paused;
                true
            }
            _ if self.paused => false,
            GameKey::Left => self.try_shift(-1, 0),
            GameKey::Right => self.try_shift(1, 0),
            // Manual soft drop; locking stays with the gravity tick.
            GameKey::Down => self.try_shift(0, 1),
            GameKey::Up => self.active.rotate(&self.board),
        }
    }

    /// Shift the active piece, rolling back if the target collides.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        self.active.shift(dx, dy);
        if self.board.collides(&self.active) {
            self.active.shift(-dx, -dy);
            return false;
        }
        true
    }

    /// Advance gravity by `elapsed_ms` of wall-clock time.
    ///
    /// Once the accumulator exceeds the level's drop interval the piece
    /// steps down one row, locking if it cannot. Returns true when the
    /// piece dropped or locked this call.
    pub fn tick(&mut self, elapsed_ms: u32, sounds: &mut dyn SoundSink) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms <= drop_interval_ms(self.level) {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_shift(0, 1) {
            self.lock_active(sounds);
        }
        true
    }

    /// Lock the active piece, clear rows, score, and promote the lookahead.
    fn lock_active(&mut self, sounds: &mut dyn SoundSink) {
        self.board.merge(&self.active, sounds);

        let cleared = self.board.clear_full_rows(sounds);
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.score += line_clear_points(cleared.len(), self.level);
            // Scoring uses the level in effect when the rows were cleared.
            self.level = self.level.max(level_for_lines(self.lines));
        }

        self.active = self.next;
        self.next = Piece::spawn(&mut self.rng);

        if self.board.collides(&self.active) {
            self.game_over = true;
            sounds.play_game_over();
        }
    }

    /// Write the render handoff into a reusable buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_cells(&mut out.board);
        out.active = PieceView::from(self.active);
        out.next = PiecePreview {
            shape: self.next.shape,
            color: self.next.color,
        };
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }
}
