//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the four logical inputs and tracks which of
//! them are pressed or held, producing one [`InputSnapshot`] per game tick
//! (including in terminals without key-release events).

pub mod handler;
pub mod map;

pub use tick_tetris_types as types;
pub use tick_tetris_types::InputSnapshot;

pub use handler::InputHandler;
pub use map::{map_key, should_quit};
