//! Pieces module - tetromino shape matrices and the falling piece
//!
//! A shape is a small rectangular boolean matrix; orientation is implicit
//! in the matrix itself and rotation is a pure value transformation
//! (transpose of the row-reversed matrix). There is no kick table: a
//! rotation that would collide simply does not happen.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{PieceColor, BOARD_WIDTH};

/// Backing-store edge for shape matrices (the I piece is 4 wide).
pub const SHAPE_MAX: usize = 4;

/// A rectangular boolean matrix of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    pub const fn new(width: u8, height: u8, cells: [[bool; SHAPE_MAX]; SHAPE_MAX]) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (row, col) is occupied.
    /// Out-of-matrix coordinates read as empty.
    pub fn filled(&self, row: u8, col: u8) -> bool {
        row < self.height && col < self.width && self.cells[row as usize][col as usize]
    }

    /// Occupied cells as (row, col) pairs. Every tetromino has exactly four.
    pub fn filled_cells(&self) -> ArrayVec<(u8, u8), 4> {
        let mut out = ArrayVec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.filled(row, col) {
                    out.push((row, col));
                }
            }
        }
        out
    }
}

/// Rotate a shape matrix 90 degrees clockwise: the transpose of the
/// row-reversed matrix. Returns a fresh value; the input is not aliased.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
    for row in 0..shape.height as usize {
        for col in 0..shape.width as usize {
            if shape.cells[row][col] {
                cells[col][shape.height as usize - 1 - row] = true;
            }
        }
    }
    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}

/// Decode per-row bitmasks (bit `1 << col` set = occupied) into a matrix.
const fn rows(masks: [u8; SHAPE_MAX]) -> [[bool; SHAPE_MAX]; SHAPE_MAX] {
    let mut out = [[false; SHAPE_MAX]; SHAPE_MAX];
    let mut r = 0;
    while r < SHAPE_MAX {
        let mut c = 0;
        while c < SHAPE_MAX {
            out[r][c] = masks[r] & (1 << c) != 0;
            c += 1;
        }
        r += 1;
    }
    out
}

/// The seven tetromino matrices in spawn orientation: I, O, T, L, J, S, Z.
pub const SHAPES: [Shape; 7] = [
    // I
    Shape::new(4, 1, rows([0b1111, 0, 0, 0])),
    // O
    Shape::new(2, 2, rows([0b11, 0b11, 0, 0])),
    // T
    Shape::new(3, 2, rows([0b010, 0b111, 0, 0])),
    // L
    Shape::new(3, 2, rows([0b001, 0b111, 0, 0])),
    // J
    Shape::new(3, 2, rows([0b100, 0b111, 0, 0])),
    // S
    Shape::new(3, 2, rows([0b110, 0b011, 0, 0])),
    // Z
    Shape::new(3, 2, rows([0b011, 0b110, 0, 0])),
];

/// The falling piece: a shape matrix, a palette color, and the grid
/// position of the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn at the top of the well, horizontally centered, with shape and
    /// color drawn independently and uniformly from their tables.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let shape = SHAPES[rng.next_range(SHAPES.len() as u32) as usize];
        let color = PieceColor::ALL[rng.next_range(PieceColor::ALL.len() as u32) as usize];
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self {
            shape,
            color,
            x,
            y: 0,
        }
    }

    /// Translate by integer deltas. No legality check: callers validate
    /// against the board and roll back if the target collides.
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate 90 degrees clockwise in place, keeping the position. If the
    /// rotated matrix collides, the previous shape is restored. Returns
    /// whether the rotation stuck.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let previous = self.shape;
        self.shape = rotate_cw(&previous);
        if board.collides(self) {
            self.shape = previous;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for shape in SHAPES {
            assert_eq!(shape.filled_cells().len(), 4);
        }
    }

    #[test]
    fn test_shape_dimensions() {
        assert_eq!((SHAPES[0].width(), SHAPES[0].height()), (4, 1)); // I
        assert_eq!((SHAPES[1].width(), SHAPES[1].height()), (2, 2)); // O
        for shape in &SHAPES[2..] {
            assert_eq!((shape.width(), shape.height()), (3, 2));
        }
    }

    #[test]
    fn test_rotate_cw_t_piece() {
        // T: [[0,1,0],[1,1,1]] -> [[1,0],[1,1],[1,0]] (nub points right)
        let t = SHAPES[2];
        let rotated = rotate_cw(&t);
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert!(rotated.filled(0, 0) && !rotated.filled(0, 1));
        assert!(rotated.filled(1, 0) && rotated.filled(1, 1));
        assert!(rotated.filled(2, 0) && !rotated.filled(2, 1));
    }

    #[test]
    fn test_rotate_cw_i_piece() {
        let i = SHAPES[0];
        let rotated = rotate_cw(&i);
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
        for row in 0..4 {
            assert!(rotated.filled(row, 0));
        }
    }

    #[test]
    fn test_rotate_cw_four_times_is_identity() {
        for shape in SHAPES {
            let mut s = shape;
            for _ in 0..4 {
                s = rotate_cw(&s);
            }
            assert_eq!(s, shape);
        }
    }

    #[test]
    fn test_rotate_cw_does_not_mutate_input() {
        let t = SHAPES[2];
        let _ = rotate_cw(&t);
        assert_eq!(t, SHAPES[2]);
    }

    #[test]
    fn test_spawn_is_centered_at_top() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..100 {
            let piece = Piece::spawn(&mut rng);
            let expected_x = 5 - (piece.shape.width() / 2) as i8;
            assert_eq!(piece.x, expected_x);
            assert_eq!(piece.y, 0);
        }
    }

    #[test]
    fn test_spawn_x_by_shape_width() {
        // 4-wide I spawns at x=3; 2- and 3-wide shapes spawn at x=4.
        let mut rng = SimpleRng::new(9);
        for _ in 0..100 {
            let piece = Piece::spawn(&mut rng);
            match piece.shape.width() {
                4 => assert_eq!(piece.x, 3),
                2 | 3 => assert_eq!(piece.x, 4),
                w => panic!("unexpected shape width {w}"),
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(777);
        let mut b = SimpleRng::new(777);
        for _ in 0..20 {
            assert_eq!(Piece::spawn(&mut a), Piece::spawn(&mut b));
        }
    }

    #[test]
    fn test_shift_is_unchecked() {
        let mut piece = Piece {
            shape: SHAPES[1],
            color: PieceColor::Yellow,
            x: 4,
            y: 0,
        };
        piece.shift(-20, 5);
        assert_eq!((piece.x, piece.y), (-16, 5));
    }

    #[test]
    fn test_rotate_reverts_when_blocked() {
        let mut board = Board::new();
        // Vertical I hugging the left wall, floor-adjacent.
        let mut piece = Piece {
            shape: rotate_cw(&SHAPES[0]),
            color: PieceColor::Cyan,
            x: 0,
            y: 16,
        };
        assert!(!board.collides(&piece));

        // Block the cells a horizontal I would need.
        for x in 1..4 {
            board.set(x, 16, Some(PieceColor::Red));
        }

        let before = piece;
        assert!(!piece.rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotate_applies_when_clear() {
        let board = Board::new();
        let mut piece = Piece {
            shape: SHAPES[2],
            color: PieceColor::Purple,
            x: 4,
            y: 5,
        };
        assert!(piece.rotate(&board));
        assert_eq!(piece.shape, rotate_cw(&SHAPES[2]));
        assert_eq!((piece.x, piece.y), (4, 5));
    }
}
