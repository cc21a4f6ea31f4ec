//! Construction errors
//!
//! Gameplay itself never fails; the only rejected inputs are field sizes
//! that cannot hold a 4x4 piece box.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field width {width} is too small (minimum {min})")]
    TooNarrow { width: u8, min: u8 },
    #[error("field height {height} is too small (minimum {min})")]
    TooShort { height: u8, min: u8 },
}
