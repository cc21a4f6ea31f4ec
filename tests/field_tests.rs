//! Field tests: border layout, locking, marking and collapsing rows

use tick_tetris::core::{fits, Field, FieldError};
use tick_tetris::types::{Cell, PieceKind, Rotation};

fn interior_text(field: &Field, y: i16) -> String {
    field
        .interior_columns()
        .map(|x| match field.get(x, y) {
            Some(Cell::Empty) => '.',
            Some(Cell::Occupied(k)) => k.letter(),
            Some(Cell::ClearingMarker) => '=',
            Some(Cell::Border) => '#',
            None => '?',
        })
        .collect()
}

#[test]
fn test_small_fields_are_rejected() {
    assert_eq!(
        Field::new(6, 18),
        Err(FieldError::TooNarrow { width: 6, min: 7 })
    );
    assert_eq!(
        Field::new(12, 2),
        Err(FieldError::TooShort { height: 2, min: 4 })
    );
    assert!(Field::new(7, 4).is_ok());
}

#[test]
fn test_error_messages_name_the_dimension() {
    let msg = FieldError::TooNarrow { width: 5, min: 7 }.to_string();
    assert!(msg.contains('5'), "{}", msg);
    assert!(msg.contains('7'), "{}", msg);
}

#[test]
fn test_border_cells_cannot_be_overwritten() {
    let mut field = Field::new(12, 18).unwrap();
    assert!(!field.set(0, 5, Cell::Occupied(PieceKind::T)));
    assert!(!field.set(11, 5, Cell::Empty));
    assert!(!field.set(5, 17, Cell::ClearingMarker));
    assert!(!field.set(5, 5, Cell::Border));
    assert_eq!(field.get(0, 5), Some(Cell::Border));
    assert_eq!(field.get(5, 5), Some(Cell::Empty));
}

#[test]
fn test_floor_is_never_a_full_row() {
    let field = Field::new(12, 18).unwrap();
    assert!(!field.is_row_full(17));
    assert!(!field.is_row_full(-1));
    assert!(!field.is_row_full(40));
}

#[test]
fn test_lock_piece_writes_rotated_cells() {
    let mut field = Field::new(12, 18).unwrap();
    // I turned a quarter lies along box row 2.
    field.lock_piece(PieceKind::I, Rotation::East, 3, 10);
    assert_eq!(interior_text(&field, 12), "..AAAA....");
    assert_eq!(interior_text(&field, 11), "..........");
}

#[test]
fn test_markers_count_toward_full_rows() {
    let field = Field::from_rows(&[
        "#.......#",
        "#.......#",
        "#=AB====#",
        "#########",
    ])
    .unwrap();
    assert!(field.is_row_full(2));
    assert!(!field.is_row_full(1));
}

#[test]
fn test_marked_row_blocks_pieces() {
    let mut field = Field::new(12, 18).unwrap();
    field.mark_row(16);
    assert_eq!(interior_text(&field, 16), "==========");
    // O occupies box rows 1 and 2.
    assert!(fits(PieceKind::O, Rotation::North, 4, 13, &field));
    assert!(!fits(PieceKind::O, Rotation::North, 4, 14, &field));
}

#[test]
fn test_collapse_single_row_shifts_everything_above() {
    let mut field = Field::from_rows(&[
        "#.......#",
        "#A......#",
        "#.B.....#",
        "#CCCC...#",
        "#D..D...#",
        "#########",
    ])
    .unwrap();
    field.collapse_row(3);

    assert_eq!(interior_text(&field, 0), ".......");
    assert_eq!(interior_text(&field, 1), ".......");
    assert_eq!(interior_text(&field, 2), "A......");
    assert_eq!(interior_text(&field, 3), ".B.....");
    assert_eq!(interior_text(&field, 4), "D..D...");
    assert_eq!(field.get(0, 3), Some(Cell::Border));
    assert_eq!(field.get(8, 0), Some(Cell::Border));
}

#[test]
fn test_collapse_rows_in_any_order() {
    let rows = [
        "#A......#",
        "#=======#",
        "#.B.....#",
        "#=======#",
        "#C......#",
        "#########",
    ];
    let base = Field::from_rows(&rows).unwrap();

    let mut ascending = base.clone();
    ascending.collapse_rows(&[1, 3]);
    let mut descending = base.clone();
    descending.collapse_rows(&[3, 1]);

    assert_eq!(ascending, descending);
    assert_eq!(interior_text(&ascending, 0), ".......");
    assert_eq!(interior_text(&ascending, 1), ".......");
    assert_eq!(interior_text(&ascending, 2), "A......");
    assert_eq!(interior_text(&ascending, 3), ".B.....");
    assert_eq!(interior_text(&ascending, 4), "C......");
}

#[test]
fn test_collapse_top_row_just_clears_it() {
    let mut field = Field::from_rows(&["#AAAAAAA#", "#B......#", "#.......#", "#########"]).unwrap();
    field.collapse_row(0);
    assert_eq!(interior_text(&field, 0), ".......");
    assert_eq!(interior_text(&field, 1), "B......");
}

#[test]
fn test_collapse_ignores_floor_and_out_of_range() {
    let base = Field::from_rows(&["#A.....#", "#.B....#", "#..C...#", "########"]).unwrap();
    let mut field = base.clone();
    field.collapse_row(3);
    field.collapse_row(-1);
    field.collapse_row(9);
    assert_eq!(field, base);
}
