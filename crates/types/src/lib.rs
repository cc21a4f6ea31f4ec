//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! The playing field includes its own walls:
//!
//! - **Width**: 12 columns by default; columns 0 and `width - 1` are border
//! - **Height**: 18 rows by default; row `height - 1` is the floor border
//! - **Spawn position**: `(width / 2, 0)` with rotation 0
//!
//! # Timing and Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed cadence of one logic step |
//! | `DEFAULT_GRAVITY_INTERVAL` | 20 | Ticks between forced descents at start |
//! | `MIN_GRAVITY_INTERVAL` | 10 | Gravity never gets faster than this |
//! | `PIECES_PER_SPEEDUP` | 50 | Piece-counter steps between speedups |
//! | `LOCK_SCORE` | 25 | Flat award for every locked piece |
//! | `LINE_CLEAR_BASE` | 100 | Multiplied by `1 << lines` on a clear |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Cell, Input, InputSnapshot, PieceKind, Rotation};
//!
//! let kind = PieceKind::from_id(2).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.letter(), 'C');
//!
//! assert_eq!(Rotation::from_quarter(5), Rotation::East);
//! assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
//!
//! let input = InputSnapshot::none().with(Input::Rotate);
//! assert!(input.rotate);
//! assert!(!input.move_left);
//!
//! assert!(Cell::Empty.is_empty());
//! assert!(!Cell::Border.is_empty());
//! ```

/// Default field width in cells, borders included (12 columns)
pub const DEFAULT_FIELD_WIDTH: u8 = 12;

/// Default field height in cells, floor included (18 rows)
pub const DEFAULT_FIELD_HEIGHT: u8 = 18;

/// Smallest field width whose spawn columns are all interior
///
/// Pieces spawn with their box at column `width / 2` and fill box columns 1
/// and 2, so `width / 2 + 2` must stay left of the right wall.
pub const MIN_FIELD_WIDTH: u8 = 7;

/// Smallest field height that still holds a 4x4 piece box
pub const MIN_FIELD_HEIGHT: u8 = 4;

/// Side length of the square box every shape is defined in
pub const PIECE_BOX: u8 = 4;

/// Number of distinct shapes
pub const SHAPE_COUNT: u8 = 7;

/// Fixed cadence of one logic tick in milliseconds
pub const TICK_MS: u32 = 50;

/// Ticks between forced descents when a session starts
pub const DEFAULT_GRAVITY_INTERVAL: u32 = 20;

/// Floor for the gravity interval
pub const MIN_GRAVITY_INTERVAL: u32 = 10;

/// Piece-counter steps between gravity speedups
pub const PIECES_PER_SPEEDUP: u32 = 50;

/// Flat score for locking any piece
pub const LOCK_SCORE: u32 = 25;

/// Line clear award is `(1 << lines) * LINE_CLEAR_BASE`
pub const LINE_CLEAR_BASE: u32 = 100;

/// The seven tetromino shapes, numbered in shape-table order (0..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl PieceKind {
    /// All shapes in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Look up a shape by its id; `None` outside 0..=6
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Shape id in 0..=6
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Display letter: 'A' for shape 0 through 'G' for shape 6
    pub fn letter(&self) -> char {
        (b'A' + self.id()) as char
    }

    /// Lowercase conventional name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Rotation quarter of the 4x4 piece box (North = spawn orientation, 0 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build from a quarter count, taken modulo 4
    pub fn from_quarter(quarter: u32) -> Self {
        match quarter % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Quarter count in 0..=3
    pub fn quarter(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate one quarter clockwise
    pub fn rotate_cw(&self) -> Self {
        Self::from_quarter(self.quarter() as u32 + 1)
    }
}

/// A single field cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Locked remains of a piece
    Occupied(PieceKind),
    /// Permanent wall or floor
    Border,
    /// Interior of a completed row waiting to collapse
    ClearingMarker,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Logical inputs the rule engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl Input {
    pub const ALL: [Input; 4] = [Input::MoveLeft, Input::MoveRight, Input::SoftDrop, Input::Rotate];
}

/// Which logical inputs are active (pressed or held) during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl InputSnapshot {
    /// No input active
    pub const fn none() -> Self {
        Self {
            move_left: false,
            move_right: false,
            soft_drop: false,
            rotate: false,
        }
    }

    /// Builder-style activation of one input
    pub fn with(mut self, input: Input) -> Self {
        self.set(input, true);
        self
    }

    pub fn set(&mut self, input: Input, active: bool) {
        match input {
            Input::MoveLeft => self.move_left = active,
            Input::MoveRight => self.move_right = active,
            Input::SoftDrop => self.soft_drop = active,
            Input::Rotate => self.rotate = active,
        }
    }
}

impl FromIterator<Input> for InputSnapshot {
    fn from_iter<T: IntoIterator<Item = Input>>(iter: T) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}
