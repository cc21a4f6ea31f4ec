//! Rotation mapper - reads a shape pattern as if its 4x4 box were rotated
//!
//! Rotation never materializes rotated copies. Instead, a `(col, row)`
//! position in the rotated box is mapped back to the index of the
//! unrotated pattern cell that lands there. Quarters turn clockwise:
//!
//! ```text
//!   North          East           South          West
//!  0  1  2  3    12  8  4  0    15 14 13 12     3  7 11 15
//!  4  5  6  7    13  9  5  1    11 10  9  8     2  6 10 14
//!  8  9 10 11    14 10  6  2     7  6  5  4     1  5  9 13
//! 12 13 14 15    15 11  7  3     3  2  1  0     0  4  8 12
//! ```

use crate::shapes::is_filled;
use crate::types::{PieceKind, Rotation, PIECE_BOX};

/// Map a position in the rotated box to an index into the flat pattern.
///
/// `col` and `row` must be in `0..4`. The mapping is a bijection over the
/// 16 positions for every rotation.
#[inline(always)]
pub fn rotate_index(col: u8, row: u8, rotation: Rotation) -> usize {
    debug_assert!(col < PIECE_BOX && row < PIECE_BOX);
    let (c, r) = (col as usize, row as usize);
    match rotation {
        Rotation::North => r * 4 + c,
        Rotation::East => 12 + r - c * 4,
        Rotation::South => 15 - r * 4 - c,
        Rotation::West => 3 - r + c * 4,
    }
}

/// Quarter-count form: `quarter` is taken modulo 4.
pub fn map_index(col: u8, row: u8, quarter: u32) -> usize {
    rotate_index(col, row, Rotation::from_quarter(quarter))
}

/// Whether the rotated shape fills box position `(col, row)`
#[inline(always)]
pub fn is_filled_rotated(kind: PieceKind, rotation: Rotation, col: u8, row: u8) -> bool {
    is_filled(kind, rotate_index(col, row, rotation))
}

/// Box-relative `(col, row)` of every filled cell of a rotated shape,
/// scanned row by row.
pub fn filled_cells(kind: PieceKind, rotation: Rotation) -> impl Iterator<Item = (u8, u8)> {
    (0..(PIECE_BOX * PIECE_BOX) as usize)
        .map(index_position)
        .filter(move |&(col, row)| is_filled_rotated(kind, rotation, col, row))
}

/// Inverse of the index mapping: the `(col, row)` in a North box of `index`.
pub fn index_position(index: usize) -> (u8, u8) {
    let side = PIECE_BOX as usize;
    ((index % side) as u8, (index / side) as u8)
}
