//! Scoring module - lock awards and gravity progression
//!
//! Every locked piece is worth a flat [`LOCK_SCORE`]. Completing rows adds
//! `(1 << lines) * LINE_CLEAR_BASE` on top, so one row pays 200, two 400,
//! three 800 and four 1600.
//!
//! Gravity is counted in ticks. Each forced descent advances the piece
//! counter, and every [`PIECES_PER_SPEEDUP`] steps the interval shrinks by
//! one tick until it reaches [`MIN_GRAVITY_INTERVAL`].

use crate::types::{
    DEFAULT_GRAVITY_INTERVAL, LINE_CLEAR_BASE, LOCK_SCORE, MIN_GRAVITY_INTERVAL,
    PIECES_PER_SPEEDUP,
};

/// Points for clearing `lines` rows at once (0 when nothing cleared)
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    (1u32 << lines) * LINE_CLEAR_BASE
}

/// Total awarded for one lock, including the flat lock score
pub fn lock_award(lines: usize) -> u32 {
    LOCK_SCORE + line_clear_score(lines)
}

/// Gravity counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gravity {
    interval: u32,
    counter: u32,
    pieces: u32,
}

impl Gravity {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_GRAVITY_INTERVAL)
    }

    /// Start at a custom interval (never below the floor)
    pub fn with_interval(interval: u32) -> Self {
        Self {
            interval: interval.max(MIN_GRAVITY_INTERVAL),
            counter: 0,
            pieces: 0,
        }
    }

    /// Current ticks between forced descents
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Ticks counted towards the next forced descent
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Piece counter driving the speedups
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Advance one tick. Returns true when the piece must be forced down.
    pub fn step(&mut self) -> bool {
        self.counter += 1;
        if self.counter < self.interval {
            return false;
        }

        self.counter = 0;
        self.pieces = self.pieces.wrapping_add(1);
        if self.pieces % PIECES_PER_SPEEDUP == 0 && self.interval > MIN_GRAVITY_INTERVAL {
            self.interval -= 1;
        }
        true
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new()
    }
}
