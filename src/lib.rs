//! Tick Tetris (workspace facade crate).
//!
//! The rule engine, input mapping and terminal presentation live in dedicated
//! crates under `crates/`; this package re-exports them and adds the pieces
//! the binary needs around a session: configuration and the session log.

pub mod config;
pub mod session_log;

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;
