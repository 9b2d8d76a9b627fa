//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{blocks_of, get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation};

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

/// Driver state shown next to the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelStatus {
    pub ai_enabled: bool,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Side of the square the next-piece preview is drawn in
const PREVIEW_CELLS: u16 = 4;

/// A lightweight terminal renderer for the game.
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
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: PanelStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = snap.board.width() as u16;
        let board_h = snap.board.height() as u16;
        let frame_w = board_w * self.cell_w + 2;
        let frame_h = board_h * self.cell_h + 2;

        let panel_w = PREVIEW_CELLS * self.cell_w + 2;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w * self.cell_w,
            board_h * self.cell_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let origin = (start_x + 1, start_y + 1);
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.draw_piece_cell(fb, origin, x, y, *kind),
                    None => self.fill_cell_rect(
                        fb,
                        origin,
                        x,
                        y,
                        '·',
                        CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim(),
                    ),
                }
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, start_x + frame_w + 2, start_y);

        if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: PanelStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_piece_cell(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::plain(piece_color(kind), BOARD_BG).bold();
        self.fill_cell_rect(fb, origin, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + cell_x * self.cell_w;
        let py = origin.1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: PanelStatus,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.visual_score, value);
        y += 3;

        fb.put_str(panel_x, y, "ROWS", label);
        fb.put_u32(panel_x, y + 1, snap.rows, value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        let ms = (snap.drop_interval * 1000.0).round() as u32;
        fb.put_u32(panel_x, y + 1, ms, value);
        fb.put_str(panel_x + digit_count(ms), y + 1, "ms", value.dim());
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let preview = CellStyle::plain(piece_color(snap.next), PANEL_BG).bold();
        for &(bx, by) in blocks_of(snap.next, 0, 0, Rotation::North).iter() {
            self.fill_cell_rect(fb, (panel_x, y), bx as u16, by as u16, '█', preview);
        }
        y += PREVIEW_CELLS * self.cell_h + 1;

        fb.put_str(panel_x, y, "AI", label);
        fb.put_str(
            panel_x,
            y + 1,
            if status.ai_enabled { "ON" } else { "OFF" },
            value,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay_text(fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

/// Terminal color for a piece, from its catalog color tag
pub fn piece_color(kind: PieceKind) -> Rgb {
    match get_shape(kind).color {
        "cyan" => Rgb::new(80, 220, 220),
        "blue" => Rgb::new(80, 120, 220),
        "orange" => Rgb::new(255, 165, 0),
        "yellow" => Rgb::new(240, 220, 80),
        "green" => Rgb::new(100, 220, 120),
        "purple" => Rgb::new(200, 120, 220),
        "red" => Rgb::new(220, 80, 80),
        _ => Rgb::new(200, 200, 200),
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn text(fb: &FrameBuffer) -> String {
        fb.to_lines().join("\n")
    }

    #[test]
    fn renders_board_frame_and_panel() {
        let game = GameState::with_seed(4);
        let fb = GameView::default().render(&game.snapshot(), PanelStatus::default(), Viewport::new(60, 26));
        let out = text(&fb);

        assert!(out.contains('┌'));
        assert!(out.contains("SCORE"));
        assert!(out.contains("ROWS"));
        assert!(out.contains("NEXT"));
        assert!(out.contains("600ms"));
        assert!(out.contains("OFF"));
        assert!(!out.contains("GAME OVER"));
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let game = GameState::with_seed(4);
        let fb = GameView::default().render(&game.snapshot(), PanelStatus::default(), Viewport::new(60, 26));
        let color = piece_color(game.current().kind);
        assert_eq!(fb.to_lines().len(), 26);

        let mut found = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if let Some(cell) = fb.get(x, y) {
                    if cell.ch == '█' && cell.style.fg == color && cell.style.bg == BOARD_BG {
                        found += 1;
                    }
                }
            }
        }
        // Four blocks, two columns each.
        assert_eq!(found, 8);
    }

    #[test]
    fn overlays_follow_flags() {
        let mut game = GameState::with_seed(4);
        game.toggle_pause();
        let view = GameView::default();
        let status = PanelStatus { ai_enabled: true };
        let paused = text(&view.render(&game.snapshot(), status, Viewport::new(60, 26)));
        assert!(paused.contains("PAUSED"));
        assert!(paused.contains("ON"));

        game.toggle_pause();
        game.end_game();
        let over = text(&view.render(&game.snapshot(), status, Viewport::new(60, 26)));
        assert!(over.contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let game = GameState::with_seed(1);
        let fb = GameView::default().render(&game.snapshot(), PanelStatus::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(600), 3);
        assert_eq!(digit_count(u32::MAX), 10);
    }
}
