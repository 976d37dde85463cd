//! Integration tests - full games played through the public API

use marble_solitaire::core::Game;
use marble_solitaire::types::Move;

/// Six moves on the default board that leave no further jumps anywhere.
const DEAD_END_SEQUENCE: [Move; 6] = [
    Move {
        from_row: 3,
        from_col: 1,
        to_row: 3,
        to_col: 3,
    },
    Move {
        from_row: 3,
        from_col: 4,
        to_row: 3,
        to_col: 2,
    },
    Move {
        from_row: 5,
        from_col: 3,
        to_row: 3,
        to_col: 3,
    },
    Move {
        from_row: 2,
        from_col: 3,
        to_row: 4,
        to_col: 3,
    },
    Move {
        from_row: 0,
        from_col: 3,
        to_row: 2,
        to_col: 3,
    },
    Move {
        from_row: 3,
        from_col: 6,
        to_row: 3,
        to_col: 4,
    },
];

#[test]
fn test_scripted_game_reaches_dead_end() {
    let mut game = Game::default();

    for (i, &mv) in DEAD_END_SEQUENCE.iter().enumerate() {
        assert!(!game.is_game_over(), "game ended early before move {}", i);
        game.apply_move(mv).unwrap_or_else(|err| panic!("move {}: {}", i, err));
        assert_eq!(game.score(), 31 - i as u32);
    }

    assert!(game.is_game_over(), "no jump should remain after the script");
    assert_eq!(game.score(), 26);
    assert!(game.legal_moves().is_empty());

    let expected = [
        "    O _ O    ",
        "    O _ O    ",
        "O O O O O O O",
        "O _ O _ O _ _",
        "O O O O O O O",
        "    O _ O    ",
        "    O O O    ",
    ]
    .join("\n");
    assert_eq!(game.render(), expected);
}

#[test]
fn test_score_tracks_marble_count_throughout() {
    let mut game = Game::default();
    assert_eq!(game.score(), game.board().marble_count());

    for &mv in &DEAD_END_SEQUENCE {
        game.apply_move(mv).unwrap();
        assert_eq!(game.score(), game.board().marble_count());
    }
}

#[test]
fn test_dead_end_game_rejects_further_moves() {
    let mut game = Game::default();
    for &mv in &DEAD_END_SEQUENCE {
        game.apply_move(mv).unwrap();
    }

    let before = game.clone();
    // Replays of earlier moves all fail and change nothing.
    for &mv in &DEAD_END_SEQUENCE {
        assert!(game.apply_move(mv).is_err());
    }
    assert_eq!(game, before);
}

#[test]
fn test_game_over_scan_matches_move_enumeration() {
    let mut game = Game::default();
    for &mv in &DEAD_END_SEQUENCE {
        assert_eq!(game.is_game_over(), game.legal_moves().is_empty());
        game.apply_move(mv).unwrap();
    }
    assert_eq!(game.is_game_over(), game.legal_moves().is_empty());
}

#[test]
fn test_games_are_independent_values() {
    let mut a = Game::default();
    let b = a.clone();

    a.apply_move(Move::new(1, 3, 3, 3)).unwrap();
    assert_eq!(a.score(), 31);
    assert_eq!(b.score(), 32, "cloned game is an independent value");
}
