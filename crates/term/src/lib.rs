//! Terminal presentation for the game.
//!
//! Snapshots from `core` are drawn into a plain framebuffer by [`GameView`],
//! then flushed to the terminal by [`TerminalRenderer`], which only rewrites
//! cells that changed since the previous frame. Field cells are two columns
//! wide so the playfield keeps a roughly square aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, cell_symbol, piece_color, GameView, Glyphs, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
