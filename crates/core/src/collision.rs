//! Collision checker
//!
//! A placement fits when no filled cell of the rotated shape lands on a
//! non-empty field cell. Filled cells whose column or row falls outside the
//! grid are ignored rather than rejected, so a 4x4 box may hang past the
//! edges while rotating. The walls and floor are real `Border` cells, which
//! is what keeps pieces inside the playable area.

use crate::field::Field;
use crate::rotation::is_filled_rotated;
use crate::types::{PieceKind, Rotation, PIECE_BOX};

/// Check whether `kind` at `rotation` fits with its box origin at `(x, y)`
pub fn fits(kind: PieceKind, rotation: Rotation, x: i16, y: i16, field: &Field) -> bool {
    for py in 0..PIECE_BOX {
        for px in 0..PIECE_BOX {
            if !is_filled_rotated(kind, rotation, px, py) {
                continue;
            }
            let fx = x + px as i16;
            let fy = y + py as i16;
            if let Some(cell) = field.get(fx, fy) {
                if !cell.is_empty() {
                    return false;
                }
            }
        }
    }
    true
}
