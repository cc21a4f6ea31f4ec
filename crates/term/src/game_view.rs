//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and makes no game decisions: it only turns
//! field cells and the active piece into symbols and colours.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind};

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

/// How filled cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyphs {
    /// Solid coloured blocks
    Blocks,
    /// The cell symbol itself (`A`..`G`, `=`, `#`)
    Letters,
}

/// Symbol for a field cell: ' ' empty, 'A'..'G' shapes, '=' clearing, '#' border.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(kind) => kind.letter(),
        Cell::ClearingMarker => '=',
        Cell::Border => '#',
    }
}

/// Colour for a shape.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(255, 0, 0),
        PieceKind::T => Rgb::new(0, 255, 0),
        PieceKind::O => Rgb::new(0, 0, 255),
        PieceKind::Z => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(230, 26, 155),
        PieceKind::L => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(204, 102, 0),
    }
}

/// Colour for a field cell; `None` for empty cells.
pub fn cell_color(cell: Cell) -> Option<Rgb> {
    match cell {
        Cell::Empty => None,
        Cell::Occupied(kind) => Some(piece_color(kind)),
        Cell::ClearingMarker => Some(Rgb::WHITE),
        Cell::Border => Some(Rgb::GREY),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    glyphs: Glyphs,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            glyphs: Glyphs::Blocks,
        }
    }
}

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            glyphs: Glyphs::Blocks,
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field_px_w = snap.width as u16 * self.cell_w;
        let field_px_h = snap.height as u16 * self.cell_h;
        let start_x = viewport.width.saturating_sub(field_px_w) / 2;
        let start_y = viewport.height.saturating_sub(field_px_h) / 2;

        // Field cells, walls and floor included.
        for y in 0..snap.height as i16 {
            for x in 0..snap.width as i16 {
                let cell = snap.cell(x, y).unwrap_or_default();
                self.draw_field_cell(fb, start_x, start_y, x as u16, y as u16, cell);
            }
        }

        // Active piece, in-bounds cells only.
        if let Some(active) = snap.active {
            for &(x, y) in active.cells.iter() {
                if snap.cell(x, y).is_some() {
                    self.draw_field_cell(
                        fb,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        Cell::Occupied(active.kind),
                    );
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, field_px_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, field_px_w, field_px_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        cell: Cell,
    ) {
        let px = start_x + x * self.cell_w;
        let py = start_y + y * self.cell_h;
        let (ch, style) = match (cell_color(cell), self.glyphs) {
            (None, _) => (' ', CellStyle::fg(FIELD_BG)),
            (Some(color), Glyphs::Blocks) => ('█', CellStyle::fg(color)),
            (Some(color), Glyphs::Letters) => (cell_symbol(cell), CellStyle::fg(color).bold()),
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        field_px_w: u16,
    ) {
        let panel_x = start_x.saturating_add(field_px_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.gravity_interval, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STEPS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pieces, value);
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
        fb.put_str(x, mid_y, text, CellStyle::fg(Rgb::WHITE).bold());
    }
}
