//! Render tests - exact textual board output

use marble_solitaire::core::Game;
use marble_solitaire::types::Move;

#[test]
fn test_initial_render_default_board() {
    let game = Game::default();
    let expected = [
        "    O O O    ",
        "    O O O    ",
        "O O O O O O O",
        "O O O _ O O O",
        "O O O O O O O",
        "    O O O    ",
        "    O O O    ",
    ]
    .join("\n");
    assert_eq!(game.render(), expected);
}

#[test]
fn test_render_after_move() {
    let mut game = Game::default();
    game.apply_move(Move::new(1, 3, 3, 3)).unwrap();

    let expected = [
        "    O O O    ",
        "    O _ O    ",
        "O O O _ O O O",
        "O O O O O O O",
        "O O O O O O O",
        "    O O O    ",
        "    O O O    ",
    ]
    .join("\n");
    assert_eq!(game.render(), expected);
}

#[test]
fn test_render_shape() {
    let game = Game::default();
    let rendered = game.render();

    assert!(!rendered.ends_with('\n'), "no trailing newline");
    let lines: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(lines.len(), 7);
    // Every line is symbols joined by single spaces: 2*size - 1 chars.
    for line in &lines {
        assert_eq!(line.chars().count(), 13);
    }

    // Arm rows carry four leading blanks (two invalid cells plus separators).
    assert!(lines[0].starts_with("    O"));
    // The empty hole renders as '_' at the center column.
    assert_eq!(lines[3].chars().nth(6), Some('_'));
}

#[test]
fn test_render_larger_board() {
    let game = Game::with_arm_thickness(5).unwrap();
    let rendered = game.render();
    let lines: Vec<&str> = rendered.split('\n').collect();

    assert_eq!(lines.len(), 13);
    for line in &lines {
        assert_eq!(line.chars().count(), 25);
    }
    // Top arm row: four invalid cells, five marbles, four invalid cells.
    assert_eq!(lines[0], "        O O O O O        ");
    // Center row holds the single empty cell.
    assert_eq!(lines[6], "O O O O O O _ O O O O O O");
}
