use crate::game_state::Tetromino;
use crate::types::{Cell, PieceKind, Rotation};

/// Observable phase between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Falling,
    /// Completed rows are marked and collapse on the next tick
    LineClearing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
    /// Absolute field positions of the four filled cells (may lie off-grid)
    pub cells: [(i16, i16); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Read-only view of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major field cells (`y * width + x`)
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub gravity_interval: u32,
    pub pieces: u32,
    pub tick: u64,
}

impl GameSnapshot {
    /// Field cell at (x, y); `None` off-grid
    pub fn cell(&self, x: i16, y: i16) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}
