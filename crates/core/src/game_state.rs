//! Game state module - the per-tick rule engine
//!
//! Ties together the field, the falling piece, the piece source, gravity and
//! scoring. The game is driven by [`GameState::tick`], called once per fixed
//! step with the inputs active during that step. Each tick runs:
//!
//! 1. collapse of rows completed on the previous tick
//! 2. input: move right, move left, soft drop, rotate (edge-triggered)
//! 3. gravity: count the tick and decide whether the piece is forced down
//! 4. drop or lock: descend one row, or lock, mark full rows, score and spawn
//!
//! Illegal moves are silently ignored. When a freshly spawned piece does not
//! fit, the game is over: rows marked by that last lock collapse at once and
//! every later tick is a no-op.

use arrayvec::ArrayVec;

use crate::collision::fits;
use crate::error::FieldError;
use crate::field::Field;
use crate::rng::PieceSource;
use crate::rotation::filled_cells;
use crate::scoring::{lock_award, Gravity};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, Phase};
use crate::types::{InputSnapshot, PieceKind, Rotation, PIECE_BOX};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the 4x4 box origin
    pub x: i16,
    /// Row of the 4x4 box origin
    pub y: i16,
}

impl Tetromino {
    /// A new piece at the spawn position: horizontal centre, row 0, unrotated
    pub fn spawn(kind: PieceKind, field_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: (field_width / 2) as i16,
            y: 0,
        }
    }

    pub fn fits(&self, field: &Field) -> bool {
        fits(self.kind, self.rotation, self.x, self.y, field)
    }

    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Absolute field positions of the four filled cells
    pub fn cells(&self) -> [(i16, i16); 4] {
        let mut out = [(0, 0); 4];
        for (slot, (px, py)) in out.iter_mut().zip(filled_cells(self.kind, self.rotation)) {
            *slot = (self.x + px as i16, self.y + py as i16);
        }
        out
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Completed rows, top to bottom
    pub rows: ArrayVec<i16, 4>,
    /// Points awarded for this lock
    pub award: u32,
}

impl LockEvent {
    pub fn lines(&self) -> usize {
        self.rows.len()
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Gravity moved the piece down one row
    pub forced_down: bool,
    pub lock: Option<LockEvent>,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    active: Tetromino,
    source: PieceSource,
    gravity: Gravity,
    score: u32,
    /// Rows marked on the last lock, collapsed at the start of the next tick
    pending_rows: ArrayVec<i16, 4>,
    /// Rotate input was active on the previous tick
    rotate_latched: bool,
    game_over: bool,
    ticks: u64,
}

impl GameState {
    /// Create a new game with a seeded random piece source
    pub fn new(width: u8, height: u8, seed: u64) -> Result<Self, FieldError> {
        Self::with_source(width, height, PieceSource::seeded(seed))
    }

    /// Create a new game drawing pieces from `source`
    pub fn with_source(
        width: u8,
        height: u8,
        source: impl Into<PieceSource>,
    ) -> Result<Self, FieldError> {
        let field = Field::new(width, height)?;
        let mut source = source.into();
        let active = Tetromino::spawn(source.next_kind(), width);
        Ok(Self::from_parts(field, active, source))
    }

    /// Assemble a game from an existing field and piece, with fresh counters.
    ///
    /// The game starts in the game-over state if `active` does not fit.
    pub fn from_parts(field: Field, active: Tetromino, source: PieceSource) -> Self {
        let game_over = !active.fits(&field);
        Self {
            field,
            active,
            source,
            gravity: Gravity::new(),
            score: 0,
            pending_rows: ArrayVec::new(),
            rotate_latched: false,
            game_over,
            ticks: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    pub fn pending_rows(&self) -> &[i16] {
        &self.pending_rows
    }

    /// Ticks processed so far (terminal no-op ticks are not counted)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if !self.pending_rows.is_empty() {
            Phase::LineClearing
        } else {
            Phase::Falling
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.field.width();
        out.height = self.field.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.field.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.phase = self.phase();
        out.game_over = self.game_over;
        out.gravity_interval = self.gravity.interval();
        out.pieces = self.gravity.pieces();
        out.tick = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one fixed step
    pub fn tick(&mut self, input: InputSnapshot) -> TickResult {
        if self.game_over {
            return TickResult {
                game_over: true,
                ..TickResult::default()
            };
        }
        self.ticks += 1;

        self.collapse_pending();
        self.apply_input(input);

        let mut result = TickResult::default();
        if self.gravity.step() {
            if self.try_move(0, 1) {
                result.forced_down = true;
            } else {
                result.lock = Some(self.lock_active());
            }
        }

        result.game_over = self.game_over;
        result
    }

    fn collapse_pending(&mut self) {
        if self.pending_rows.is_empty() {
            return;
        }
        self.field.collapse_rows(&self.pending_rows);
        self.pending_rows.clear();
    }

    fn apply_input(&mut self, input: InputSnapshot) {
        if input.move_right {
            self.try_move(1, 0);
        }
        if input.move_left {
            self.try_move(-1, 0);
        }
        if input.soft_drop {
            self.try_move(0, 1);
        }

        // Rotation only acts on the tick the input goes from inactive to active.
        if input.rotate {
            if !self.rotate_latched {
                self.try_rotate();
            }
            self.rotate_latched = true;
        } else {
            self.rotate_latched = false;
        }
    }

    /// Try to move the active piece; returns whether it moved
    pub(crate) fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let candidate = self.active.shifted(dx, dy);
        if candidate.fits(&self.field) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Try to rotate the active piece a quarter clockwise in place
    pub(crate) fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated_cw();
        if candidate.fits(&self.field) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Lock the active piece, mark completed rows, score and spawn the next piece
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        self.field
            .lock_piece(piece.kind, piece.rotation, piece.x, piece.y);

        let mut rows = ArrayVec::<i16, 4>::new();
        for py in 0..PIECE_BOX as i16 {
            let y = piece.y + py;
            if self.field.is_row_full(y) {
                self.field.mark_row(y);
                rows.push(y);
            }
        }

        let award = lock_award(rows.len());
        self.score = self.score.saturating_add(award);
        self.pending_rows = rows.clone();

        self.spawn_next();

        LockEvent {
            kind: piece.kind,
            rows,
            award,
        }
    }

    fn spawn_next(&mut self) {
        let kind = self.source.next_kind();
        self.active = Tetromino::spawn(kind, self.field.width());
        if !self.active.fits(&self.field) {
            self.game_over = true;
            // No later tick runs, so settle the field now.
            self.collapse_pending();
        }
    }
}
