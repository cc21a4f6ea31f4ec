use tick_tetris::core::{Field, GameState, PieceSource, Tetromino};
use tick_tetris::term::{piece_color, GameView, Glyphs, Rgb, Viewport};
use tick_tetris::types::{Cell, PieceKind};

fn screen_text(fb: &tick_tetris::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_draws_field_cells_two_columns_wide() {
    let state = GameState::with_source(12, 18, PieceSource::scripted([PieceKind::I])).unwrap();
    let mut snap = state.snapshot();
    snap.active = None;

    // Field is 24x18 terminal cells, exactly the viewport.
    let fb = GameView::default().render(&snap, Viewport::new(24, 18));

    // Left wall, floor and right wall are grey blocks.
    for (x, y) in [(0, 0), (1, 0), (22, 5), (23, 5), (10, 17), (11, 17)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", x, y);
        assert_eq!(cell.style.fg, Rgb::GREY);
    }
    // Interior is blank.
    assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(21, 16).unwrap().ch, ' ');
}

#[test]
fn term_view_overlays_active_piece() {
    let state = GameState::with_source(12, 18, PieceSource::scripted([PieceKind::I])).unwrap();
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(24, 18));

    // I spawns in column 8, rows 0..=3.
    for y in 0..4 {
        for x in [16, 17] {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, piece_color(PieceKind::I));
        }
    }
    assert_eq!(fb.get(16, 4).unwrap().ch, ' ');
}

#[test]
fn term_view_letters_mode_uses_cell_symbols() {
    let mut rows = vec!["#..........#"; 16];
    rows.push("#=======GG=#");
    rows.push("############");
    let field = Field::from_rows(&rows).unwrap();
    let state = GameState::from_parts(
        field,
        Tetromino::spawn(PieceKind::T, 12),
        PieceSource::scripted([PieceKind::T]),
    );
    let mut snap = state.snapshot();
    snap.active = None;

    let view = GameView::default().with_glyphs(Glyphs::Letters);
    let fb = view.render(&snap, Viewport::new(24, 18));

    assert_eq!(fb.row_text(16), "##==============GGGG==##");
    assert_eq!(fb.row_text(17), "#".repeat(24));
    assert_eq!(fb.get(2, 16).unwrap().style.fg, Rgb::WHITE);
}

#[test]
fn term_view_skips_off_grid_active_cells() {
    let state = GameState::with_source(12, 18, PieceSource::scripted([PieceKind::I])).unwrap();
    let mut snap = state.snapshot();
    if let Some(active) = snap.active.as_mut() {
        for cell in active.cells.iter_mut() {
            cell.1 -= 2;
        }
    }
    let fb = GameView::default().render(&snap, Viewport::new(24, 18));
    // Rows 0 and 1 still drawn, rows -2 and -1 dropped without wrapping.
    assert_eq!(fb.get(16, 0).unwrap().ch, '█');
    assert_eq!(fb.get(16, 1).unwrap().ch, '█');
    assert_eq!(fb.get(16, 2).unwrap().ch, ' ');
    assert_eq!(fb.get(16, 17).unwrap().style.fg, Rgb::GREY);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(12, 18, 1).unwrap();
    let mut snap = state.snapshot();
    snap.score = 1625;

    let fb = GameView::default().render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1625"));
    assert!(all.contains("SPEED"));
    assert!(all.contains("20"));
}

#[test]
fn term_view_side_panel_counts_gravity_steps() {
    let mut state = GameState::with_source(12, 18, PieceSource::scripted([PieceKind::I])).unwrap();
    for _ in 0..60 {
        state.tick(tick_tetris::types::InputSnapshot::none());
    }
    // Three forced descents so far, no piece has locked.
    let snap = state.snapshot();
    assert_eq!(snap.pieces, 3);

    let fb = GameView::default().render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);
    assert!(all.contains("STEPS"));
    assert!(!all.contains("PIECES"));
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let state = GameState::new(12, 18, 1).unwrap();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(24, 18));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let state = GameState::new(12, 18, 1).unwrap();
    let mut snap = state.snapshot();
    assert!(!screen_text(&GameView::default().render(&snap, Viewport::new(40, 20))).contains("GAME OVER"));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let state = GameState::new(12, 18, 3).unwrap();
    let snap = state.snapshot();
    let view = GameView::default();

    let mut fb = tick_tetris::term::FrameBuffer::new(0, 0);
    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    view.render_into(&snap, Viewport::new(30, 18), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 18));
    assert_eq!(fb, view.render(&snap, Viewport::new(30, 18)));
}

#[test]
fn term_view_marker_cells_are_white() {
    let mut snap = GameState::new(12, 18, 3).unwrap().snapshot();
    snap.active = None;
    let idx = 16 * snap.width as usize + 4;
    snap.cells[idx] = Cell::ClearingMarker;
    let fb = GameView::default().render(&snap, Viewport::new(24, 18));
    assert_eq!(fb.get(8, 16).unwrap().style.fg, Rgb::WHITE);
}
