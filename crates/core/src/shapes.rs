//! Shape table - the seven tetrominoes as 4x4 occupancy masks
//!
//! Each pattern is 16 cells in row-major order (`row * 4 + col`), drawn
//! as text with `X` for filled and `.` for empty. Patterns are never
//! rotated in place; see [`crate::rotation`] for how rotated cells are read.

use crate::types::PieceKind;

/// Flat 4x4 occupancy mask, row-major
pub type ShapeMask = [bool; 16];

const SHAPE_ROWS: [&str; 7] = [
    "..X...X...X...X.", // I
    "..X..XX...X.....", // T
    ".....XX..XX.....", // O
    "..X..XX..X......", // Z
    ".X...XX...X.....", // S
    ".X...X...XX.....", // L
    "..X...X..XX.....", // J
];

const fn parse_mask(text: &str) -> ShapeMask {
    let bytes = text.as_bytes();
    let mut mask = [false; 16];
    let mut i = 0;
    while i < 16 {
        mask[i] = bytes[i] == b'X';
        i += 1;
    }
    mask
}

static SHAPES: [ShapeMask; 7] = [
    parse_mask(SHAPE_ROWS[0]),
    parse_mask(SHAPE_ROWS[1]),
    parse_mask(SHAPE_ROWS[2]),
    parse_mask(SHAPE_ROWS[3]),
    parse_mask(SHAPE_ROWS[4]),
    parse_mask(SHAPE_ROWS[5]),
    parse_mask(SHAPE_ROWS[6]),
];

/// Get the unrotated 16-cell pattern for a shape
pub fn shape_mask(kind: PieceKind) -> &'static ShapeMask {
    &SHAPES[kind.id() as usize]
}

/// Whether cell `index` (0..16) of the unrotated pattern is filled
#[inline(always)]
pub fn is_filled(kind: PieceKind, index: usize) -> bool {
    shape_mask(kind)[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let filled = shape_mask(kind).iter().filter(|&&c| c).count();
            assert_eq!(filled, 4, "{:?} should have 4 filled cells", kind);
        }
    }

    #[test]
    fn test_i_piece_is_vertical_column_two() {
        let mask = shape_mask(PieceKind::I);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(mask[row * 4 + col], col == 2);
            }
        }
    }

    #[test]
    fn test_o_piece_is_centered_square() {
        let mask = shape_mask(PieceKind::O);
        let filled: Vec<usize> = (0..16).filter(|&i| mask[i]).collect();
        assert_eq!(filled, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_shapes_are_distinct() {
        for a in 0..7 {
            for b in (a + 1)..7 {
                assert_ne!(SHAPES[a], SHAPES[b]);
            }
        }
    }
}
