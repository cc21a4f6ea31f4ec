//! Command-line and environment configuration for the terminal game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::term::Glyphs;
use crate::types::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH, TICK_MS};

/// Fixed-tick terminal Tetris.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tick-tetris",
    version,
    about = "Fixed-tick terminal Tetris with a deterministic rule engine.",
    long_about = "Fixed-tick terminal Tetris with a deterministic rule engine.\n\n\
        CONTROLS:\n  Left/h/a    Move left    Right/l/d   Move right\n  \
        Down/j/s    Soft drop    z/Up/k/w    Rotate\n  q / Esc     Quit\n\n\
        Every option can also be set through its TETRIS_* environment variable."
)]
pub struct Config {
    /// Field width in cells, side walls included.
    #[arg(
        long,
        env = "TETRIS_FIELD_WIDTH",
        default_value_t = DEFAULT_FIELD_WIDTH,
        value_parser = clap::value_parser!(u8).range(MIN_FIELD_WIDTH as i64..),
        value_name = "COLS"
    )]
    pub width: u8,

    /// Field height in cells, floor included.
    #[arg(
        long,
        env = "TETRIS_FIELD_HEIGHT",
        default_value_t = DEFAULT_FIELD_HEIGHT,
        value_parser = clap::value_parser!(u8).range(MIN_FIELD_HEIGHT as i64..),
        value_name = "ROWS"
    )]
    pub height: u8,

    /// Seed for the piece sequence. Defaults to the wall clock.
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds per logic tick.
    #[arg(
        long,
        env = "TETRIS_TICK_MS",
        default_value_t = TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        value_name = "MS"
    )]
    pub tick_ms: u32,

    /// Append a JSON-lines session log to this file.
    #[arg(long, env = "TETRIS_LOG_PATH", value_name = "FILE")]
    pub log_path: Option<PathBuf>,

    /// Draw cells as letters (`A`-`G`, `=`, `#`) instead of coloured blocks.
    #[arg(long, env = "TETRIS_LETTERS")]
    pub letters: bool,
}

impl Config {
    /// The configured seed, or one taken from the wall clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn glyphs(&self) -> Glyphs {
        if self.letters {
            Glyphs::Letters
        } else {
            Glyphs::Blocks
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["tick-tetris"]).unwrap();
        assert_eq!(config.width, DEFAULT_FIELD_WIDTH);
        assert_eq!(config.height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.tick_ms, TICK_MS);
        assert!(config.log_path.is_none());
        assert_eq!(config.glyphs(), Glyphs::Blocks);
    }

    #[test]
    fn test_letters_flag_selects_letter_glyphs() {
        let config = Config::try_parse_from(["tick-tetris", "--letters"]).unwrap();
        assert_eq!(config.glyphs(), Glyphs::Letters);
    }

    #[test]
    fn test_field_below_minimum_is_rejected() {
        assert!(Config::try_parse_from(["tick-tetris", "--width", "6"]).is_err());
        assert!(Config::try_parse_from(["tick-tetris", "--height", "3"]).is_err());
        assert!(Config::try_parse_from(["tick-tetris", "--width", "7", "--height", "4"]).is_ok());
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        let config = Config::try_parse_from(["tick-tetris", "--seed", "7", "--width", "10"]).unwrap();
        assert_eq!(config.resolve_seed(), 7);
        assert_eq!(config.width, 10);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        assert!(Config::try_parse_from(["tick-tetris", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
