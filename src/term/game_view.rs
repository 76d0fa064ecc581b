//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Framebuffer renderer for the well, side panel, and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match snap.board[y][x] {
                    Some(color) => {
                        self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, color)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Active piece. Rows overhanging the rim (y < 0) are simply not drawn.
        for (row, col) in snap.active.shape.filled_cells() {
            let x = snap.active.x + col as i8;
            let y = snap.active.y + row as i8;
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(
                    &mut fb,
                    start_x,
                    start_y,
                    x as u16,
                    y as u16,
                    snap.active.color,
                );
            }
        }

        // Side panel (score/level/lines/next).
        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        if snap.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: PieceColor,
    ) {
        let style = CellStyle {
            fg: palette_rgb(color),
            bg: Rgb::new(20, 20, 28),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.level), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.lines), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next_style = CellStyle {
            fg: palette_rgb(snap.next.color),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (row, col) in snap.next.shape.filled_cells() {
            let px = panel_x + (col as u16) * self.cell_w;
            let py = y + row as u16;
            if py < viewport.height {
                fb.fill_rect(px, py, self.cell_w, 1, '█', next_style);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn palette_rgb(color: PieceColor) -> Rgb {
    let (r, g, b) = color.rgb();
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, GameSnapshot};

    fn rendered(snap: &GameSnapshot) -> FrameBuffer {
        GameView::default().render(snap, Viewport::new(60, 24))
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap_or_default().ch)
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_render_draws_panel_labels() {
        let snap = GameSession::new(1).snapshot();
        let fb = rendered(&snap);
        assert!(contains_text(&fb, "SCORE"));
        assert!(contains_text(&fb, "LEVEL"));
        assert!(contains_text(&fb, "NEXT"));
    }

    #[test]
    fn test_render_draws_active_piece_blocks() {
        let snap = GameSession::new(1).snapshot();
        let fb = rendered(&snap);
        assert!(contains_text(&fb, "█"));
    }

    #[test]
    fn test_paused_and_game_over_overlays() {
        let mut snap = GameSession::new(1).snapshot();
        snap.paused = true;
        assert!(contains_text(&rendered(&snap), "PAUSED"));

        // Game over wins over paused.
        snap.game_over = true;
        let fb = rendered(&snap);
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(!contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let snap = GameSession::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
    }
}
