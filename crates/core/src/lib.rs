//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the complete rule engine: the shape table, the
//! rotation index mapper, the bordered field, collision checking, and the
//! per-tick state machine. It has **no dependencies** on terminals, input
//! devices or clocks:
//!
//! - **Deterministic**: the same seed and inputs replay the same game
//! - **Testable**: every rule is reachable through [`GameState::tick`]
//! - **Single-threaded**: a game is plain owned data, advanced by one caller
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetrominoes as 4x4 occupancy masks
//! - [`rotation`]: maps rotated box positions to pattern indices
//! - [`field`]: bordered grid with lock, mark and collapse operations
//! - [`collision`]: placement check with off-grid tolerance
//! - [`scoring`]: lock awards and gravity progression
//! - [`rng`]: seeded and scripted piece sources
//! - [`game_state`]: the tick-driven state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::GameState;
//! use tick_tetris_types::{Input, InputSnapshot};
//!
//! let mut game = GameState::new(12, 18, 42).unwrap();
//!
//! // Hold soft drop until the first piece locks.
//! let drop = InputSnapshot::none().with(Input::SoftDrop);
//! while game.tick(drop).lock.is_none() {}
//!
//! assert_eq!(game.score(), 25);
//! assert!(!game.snapshot().game_over);
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`] is one logic step (50ms in the terminal
//! game). Pacing between steps belongs to the caller.

pub mod collision;
pub mod error;
pub mod field;
pub mod game_state;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::fits;
pub use error::FieldError;
pub use field::Field;
pub use game_state::{GameState, LockEvent, Tetromino, TickResult};
pub use rng::{PieceSource, SeededRandom};
pub use rotation::{filled_cells, map_index, rotate_index};
pub use scoring::{line_clear_score, lock_award, Gravity};
pub use shapes::{shape_mask, ShapeMask};
pub use snapshot::{ActiveSnapshot, GameSnapshot, Phase};
