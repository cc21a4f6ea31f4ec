//! Field module - owns the playing grid
//!
//! The field is a `width x height` grid stored as a flat row-major buffer
//! (`y * width + x`). Column 0, column `width - 1` and row `height - 1` are
//! permanent [`Cell::Border`] cells; everything else starts [`Cell::Empty`].
//!
//! Coordinates are signed so callers can ask about positions partly outside the
//! grid; those simply resolve to `None`.

use crate::error::FieldError;
use crate::rotation::filled_cells;
use crate::types::{Cell, PieceKind, Rotation, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Field {
    /// Create a field with border walls and floor and an empty interior
    pub fn new(width: u8, height: u8) -> Result<Self, FieldError> {
        if width < MIN_FIELD_WIDTH {
            return Err(FieldError::TooNarrow {
                width,
                min: MIN_FIELD_WIDTH,
            });
        }
        if height < MIN_FIELD_HEIGHT {
            return Err(FieldError::TooShort {
                height,
                min: MIN_FIELD_HEIGHT,
            });
        }

        let (w, h) = (width as usize, height as usize);
        let cells = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                if x == 0 || x == w - 1 || y == h - 1 {
                    Cell::Border
                } else {
                    Cell::Empty
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Row index of the floor border
    pub fn floor_row(&self) -> i16 {
        self.height as i16 - 1
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) lies on the permanent border
    pub fn is_border_position(&self, x: i16, y: i16) -> bool {
        self.index(x, y).is_some()
            && (x == 0 || x == self.width as i16 - 1 || y == self.floor_row())
    }

    /// Set an interior cell.
    ///
    /// Returns false (and changes nothing) for out-of-bounds or border positions,
    /// and when asked to write `Border` into the interior.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        if self.is_border_position(x, y) || cell == Cell::Border {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Interior columns, i.e. everything between the two walls
    pub fn interior_columns(&self) -> std::ops::Range<i16> {
        1..self.width as i16 - 1
    }

    /// A row is full when every interior column is non-empty.
    /// The floor and out-of-range rows are never full.
    pub fn is_row_full(&self, y: i16) -> bool {
        if y < 0 || y >= self.floor_row() {
            return false;
        }
        self.interior_columns()
            .all(|x| !matches!(self.get(x, y), Some(Cell::Empty)))
    }

    /// Write `Occupied(kind)` for every filled cell of the rotated shape placed
    /// with its box origin at (x, y). Cells falling outside the grid are skipped.
    pub fn lock_piece(&mut self, kind: PieceKind, rotation: Rotation, x: i16, y: i16) {
        for (px, py) in filled_cells(kind, rotation) {
            self.set(x + px as i16, y + py as i16, Cell::Occupied(kind));
        }
    }

    /// Replace the interior of row `y` with clearing markers
    pub fn mark_row(&mut self, y: i16) {
        for x in self.interior_columns() {
            self.set(x, y, Cell::ClearingMarker);
        }
    }

    /// Remove row `y` from every interior column: each cell above it shifts
    /// down one row in place and row 0 becomes empty. Walls are untouched.
    pub fn collapse_row(&mut self, y: i16) {
        if y < 0 || y >= self.floor_row() {
            return;
        }

        let width = self.width as usize;
        let row = y as usize;
        for x in self.interior_columns() {
            let x = x as usize;
            for py in (1..=row).rev() {
                self.cells[py * width + x] = self.cells[(py - 1) * width + x];
            }
            self.cells[x] = Cell::Empty;
        }
    }

    /// Collapse several rows. Rows are handled top to bottom so that each
    /// collapse leaves the indices of the rows below it unchanged.
    pub fn collapse_rows(&mut self, rows: &[i16]) {
        let mut sorted: arrayvec::ArrayVec<i16, 4> = rows.iter().copied().take(4).collect();
        sorted.sort_unstable();
        for y in sorted {
            self.collapse_row(y);
        }
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a field from text rows, for tests and benchmarks.
    ///
    /// `#` border, `.` or space empty, `=` clearing marker, `A`..`G` occupied.
    /// Dimensions come from the text; border cells must be drawn as `#`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, FieldError> {
        let height = rows.len().min(u8::MAX as usize) as u8;
        let width = rows.first().map_or(0, |r| r.chars().count()).min(u8::MAX as usize) as u8;
        let mut field = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate().take(height as usize) {
            for (x, ch) in row.chars().enumerate().take(width as usize) {
                let cell = match ch {
                    '=' => Cell::ClearingMarker,
                    'A'..='G' => PieceKind::from_id(ch as u8 - b'A')
                        .map(Cell::Occupied)
                        .unwrap_or(Cell::Empty),
                    _ => Cell::Empty,
                };
                field.set(x as i16, y as i16, cell);
            }
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_has_border() {
        let field = Field::new(12, 18).unwrap();
        for y in 0..18 {
            for x in 0..12 {
                let expected = if x == 0 || x == 11 || y == 17 {
                    Cell::Border
                } else {
                    Cell::Empty
                };
                assert_eq!(field.get(x, y), Some(expected), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_field_index_calculation() {
        let field = Field::new(12, 18).unwrap();
        assert_eq!(field.index(0, 0), Some(0));
        assert_eq!(field.index(11, 0), Some(11));
        assert_eq!(field.index(0, 1), Some(12));
        assert_eq!(field.index(11, 17), Some(215));
        assert_eq!(field.index(-1, 0), None);
        assert_eq!(field.index(12, 0), None);
        assert_eq!(field.index(0, 18), None);
    }

    #[test]
    fn test_rejects_tiny_fields() {
        assert_eq!(
            Field::new(6, 18),
            Err(FieldError::TooNarrow { width: 6, min: 7 })
        );
        assert_eq!(
            Field::new(12, 0),
            Err(FieldError::TooShort { height: 0, min: 4 })
        );
        assert!(Field::new(7, 4).is_ok());
    }

    #[test]
    fn test_set_refuses_border() {
        let mut field = Field::new(7, 6).unwrap();
        assert!(!field.set(0, 2, Cell::Empty));
        assert!(!field.set(6, 2, Cell::ClearingMarker));
        assert!(!field.set(2, 5, Cell::Occupied(PieceKind::T)));
        assert!(!field.set(2, 2, Cell::Border));
        assert!(field.set(2, 2, Cell::Occupied(PieceKind::T)));
        assert_eq!(field.get(2, 2), Some(Cell::Occupied(PieceKind::T)));
    }

    #[test]
    fn test_lock_piece_skips_out_of_bounds_cells() {
        let mut field = Field::new(8, 8).unwrap();
        // I piece North occupies box column 2; origin row -2 leaves two cells above the grid.
        field.lock_piece(PieceKind::I, Rotation::North, 1, -2);
        assert_eq!(field.get(3, 0), Some(Cell::Occupied(PieceKind::I)));
        assert_eq!(field.get(3, 1), Some(Cell::Occupied(PieceKind::I)));
        assert_eq!(field.get(3, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_collapse_row_zero_clears_it() {
        let mut field = Field::from_rows(&["#AA..B#", "#.....#", "#.....#", "#######"]).unwrap();
        field.collapse_row(0);
        assert_eq!(field.get(0, 0), Some(Cell::Border));
        assert!(field.interior_columns().all(|x| field.is_empty(x, 0)));
        assert_eq!(field.get(6, 0), Some(Cell::Border));
    }

    #[test]
    fn test_from_rows_roundtrip_cells() {
        let field = Field::from_rows(&["#..B..#", "#=....#", "#######"]);
        // Three rows is below the minimum height.
        assert!(field.is_err());

        let field = Field::from_rows(&["#.B...#", "#=....#", "#.....#", "#######"]).unwrap();
        assert_eq!(field.get(2, 0), Some(Cell::Occupied(PieceKind::T)));
        assert_eq!(field.get(1, 1), Some(Cell::ClearingMarker));
        assert_eq!(field.get(1, 0), Some(Cell::Empty));
    }
}
