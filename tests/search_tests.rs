//! Search tests - evaluation, enumeration and move selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use heuristic_tetris::core::{Board, GameState};
use heuristic_tetris::engine::search::enumerate_on_board;
use heuristic_tetris::engine::{
    apply_move, compute_features, enumerate_moves, evaluate, select_greedy_move,
    select_greedy_on_board, select_lookahead_move, select_lookahead_on_board,
};
use heuristic_tetris::types::{PieceKind, Rotation};

/// Ragged stack with occasional holes, at most `max_height` tall
fn random_board(rng: &mut StdRng, width: u8, height: u8, max_height: u8) -> Board {
    let mut board = Board::new(width, height);
    for x in 0..width as i16 {
        let column = rng.random_range(0..=max_height) as i16;
        for dy in 0..column {
            if !rng.random_bool(0.15) {
                board.set(x, height as i16 - 1 - dy, Some(PieceKind::O));
            }
        }
    }
    board
}

fn well_board() -> Board {
    let mut rows = vec![".........."; 16];
    rows.extend(["zzzzzzzzz."; 4]);
    Board::from_rows(&rows)
}

#[test]
fn test_evaluate_known_board() {
    let board = Board::from_rows(&[
        "......",
        "..t...",
        ".ttt..",
        "jj..oo",
    ]);
    let f = compute_features(&board);
    // heights 1, 2, 3, 2, 1, 1
    assert_eq!(f.aggregate_height, 10);
    assert_eq!(f.complete_lines, 0);
    assert_eq!(f.holes, 2);
    assert_eq!(f.bumpiness, 1 + 1 + 1 + 1 + 0);
    let expected = -0.51 * 10.0 - 0.36 * 2.0 - 0.18 * 4.0;
    assert!((evaluate(&board) - expected).abs() < 1e-9);
}

#[test]
fn test_enumeration_uses_override_board() {
    let game = GameState::with_seed(1);
    let stacked = well_board();

    let live = enumerate_moves(&game, PieceKind::I, None);
    let over = enumerate_moves(&game, PieceKind::I, Some(&stacked));

    assert!(game.board().is_empty());
    assert!(live.iter().all(|m| m.board.count_full_rows() == 0));
    assert!(over.iter().any(|m| m.board.count_full_rows() == 4));
}

#[test]
fn test_enumeration_order_is_rotation_then_column() {
    let board = Board::new(10, 20);
    let moves = enumerate_on_board(&board, PieceKind::T);
    let keys: Vec<(usize, i16)> = moves.iter().map(|m| (m.rotation.index(), m.x)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(moves[0].rotation, Rotation::North);
}

#[test]
fn test_every_move_rests_on_something() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let board = random_board(&mut rng, 10, 20, 8);
        for kind in PieceKind::ALL {
            for m in enumerate_on_board(&board, kind) {
                assert!(!board.collides(kind, m.x, m.y, m.rotation));
                assert!(board.collides(kind, m.x, m.y + 1, m.rotation));
                assert_eq!(m.score, evaluate(&m.board));
            }
        }
    }
}

#[test]
fn test_greedy_is_never_beaten() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let mut game = GameState::with_seed(rng.random_range(0..1000));
        // Play a few greedy pieces so the live board is not empty.
        for _ in 0..rng.random_range(0..12) {
            let kind = game.current().kind;
            match select_greedy_move(&game, kind) {
                Some(mv) => {
                    let _ = apply_move(&mut game, &mv);
                }
                None => break,
            }
            if game.game_over() {
                break;
            }
        }

        let kind = game.current().kind;
        let Some(best) = select_greedy_move(&game, kind) else {
            continue;
        };
        for candidate in enumerate_moves(&game, kind, None) {
            assert!(candidate.score <= best.score);
        }
    }
}

#[test]
fn test_greedy_fills_the_well() {
    let game = GameState::with_seed(1);
    let board = well_board();
    let moves = enumerate_moves(&game, PieceKind::I, Some(&board));
    let best = moves
        .iter()
        .cloned()
        .reduce(|a, b| if b.score > a.score { b } else { a })
        .expect("I fits somewhere");

    assert_eq!(best.board.count_full_rows(), 4);
    assert_eq!(best.rotation, Rotation::East);
    assert_eq!(best.x, 7);

    // Greedy on the live (empty) board prefers lying flat on the floor.
    let flat = select_greedy_move(&game, PieceKind::I).expect("I fits");
    assert!(matches!(flat.rotation, Rotation::North | Rotation::South));
}

#[test]
fn test_lookahead_picks_best_continuation() {
    for seed in 0..8 {
        let game = GameState::with_seed(seed);
        let (current, next) = (game.current().kind, game.next().kind);
        let chosen = select_lookahead_move(&game, current, next).expect("room on an empty board");

        let first_moves = enumerate_moves(&game, current, None);
        let best_reply = |board: &Board| {
            enumerate_on_board(board, next)
                .into_iter()
                .map(|m| m.score)
                .fold(f64::NEG_INFINITY, f64::max)
        };

        let top = first_moves
            .iter()
            .map(|m| best_reply(&m.board))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(chosen.score, top);
        assert_eq!(best_reply(&chosen.board), top);

        // The first move with the top continuation wins ties.
        let first_top = first_moves
            .iter()
            .find(|m| best_reply(&m.board) == top)
            .expect("top exists");
        assert_eq!((chosen.x, chosen.rotation), (first_top.x, first_top.rotation));
    }
}

#[test]
fn test_no_move_when_piece_cannot_fit() {
    let full = Board::from_rows(&["oooo", "oooo", "oooo", "oooo"]);
    assert!(enumerate_on_board(&full, PieceKind::T).is_empty());
    assert!(select_greedy_on_board(&full, PieceKind::T).is_none());
    assert!(select_lookahead_on_board(&full, PieceKind::T, PieceKind::O).is_none());
}

#[test]
fn test_lookahead_falls_back_when_next_cannot_fit() {
    // Two rows: a flat I fits, but afterwards no 2x2 space is left for O.
    let board = Board::from_rows(&[".....", "....."]);
    let first_moves = enumerate_on_board(&board, PieceKind::I);
    assert_eq!(first_moves.len(), 2);
    for m in &first_moves {
        assert!(enumerate_on_board(&m.board, PieceKind::O).is_empty());
    }

    let chosen = select_lookahead_on_board(&board, PieceKind::I, PieceKind::O).expect("I fits");
    assert_eq!((chosen.x, chosen.rotation), (first_moves[0].x, first_moves[0].rotation));
    // No continuation, so the move keeps its own board score.
    assert_eq!(chosen.score, evaluate(&chosen.board));
}

#[test]
fn test_state_selectors_match_board_selectors() {
    let game = GameState::with_seed(9);
    let (current, next) = (game.current().kind, game.next().kind);
    assert_eq!(
        select_greedy_move(&game, current),
        select_greedy_on_board(game.board(), current)
    );
    assert_eq!(
        select_lookahead_move(&game, current, next),
        select_lookahead_on_board(game.board(), current, next)
    );
}
