//! Move search - placement enumeration with greedy and two-ply selection
//!
//! All simulation happens on cloned boards; the live game board is only read.

use crate::core::{column_span, Board, GameState};
use crate::eval::evaluate;
use crate::types::{PieceKind, Rotation};

/// A resting placement and the board it produces
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub kind: PieceKind,
    pub x: i16,
    pub y: i16,
    pub rotation: Rotation,
    /// Board after the piece is written in (rows are not cleared)
    pub board: Board,
    /// Heuristic score. For a two-ply selection this is the score of the best
    /// continuation rather than of `board` itself.
    pub score: f64,
}

/// Columns worth probing for a rotation, leftmost first
///
/// Derived from the filled columns of the rotation, so it covers exactly
/// the offsets whose blocks stay on a board of this width.
pub fn column_range(kind: PieceKind, rotation: Rotation, width: u8) -> std::ops::RangeInclusive<i16> {
    let (min_dx, max_dx) = column_span(kind, rotation);
    -min_dx..=(width as i16 - 1 - max_dx)
}

/// Row where a piece dropped from the top of column `x` comes to rest
pub fn resting_row(board: &Board, kind: PieceKind, x: i16, rotation: Rotation) -> i16 {
    let mut y = 0;
    while !board.collides(kind, x, y + 1, rotation) {
        y += 1;
    }
    y
}

/// Every resting placement of `kind` on `board`, rotation-major then
/// left to right
pub fn enumerate_on_board(board: &Board, kind: PieceKind) -> Vec<Move> {
    let mut moves = Vec::new();
    for rotation in Rotation::ALL {
        for x in column_range(kind, rotation, board.width()) {
            let y = resting_row(board, kind, x, rotation);
            if board.collides(kind, x, y, rotation) {
                continue;
            }
            let placed = board.with_piece(kind, x, y, rotation);
            let score = evaluate(&placed);
            moves.push(Move {
                kind,
                x,
                y,
                rotation,
                board: placed,
                score,
            });
        }
    }
    moves
}

/// Placements of `kind` on the live board, or on `board_override` if given
pub fn enumerate_moves(state: &GameState, kind: PieceKind, board_override: Option<&Board>) -> Vec<Move> {
    enumerate_on_board(board_override.unwrap_or(state.board()), kind)
}

/// Highest-scoring placement; the earliest one wins ties
pub fn select_greedy_move(state: &GameState, kind: PieceKind) -> Option<Move> {
    select_greedy_on_board(state.board(), kind)
}

/// Greedy selection on an arbitrary board
pub fn select_greedy_on_board(board: &Board, kind: PieceKind) -> Option<Move> {
    best_of(enumerate_on_board(board, kind))
}

/// First-ply placement whose best follow-up with `next` scores highest
///
/// Falls back to the first enumerated placement when `next` fits nowhere
/// after any first move. Returns `None` only if `kind` fits nowhere.
pub fn select_lookahead_move(state: &GameState, kind: PieceKind, next: PieceKind) -> Option<Move> {
    select_lookahead_on_board(state.board(), kind, next)
}

/// Two-ply selection on an arbitrary board
pub fn select_lookahead_on_board(board: &Board, kind: PieceKind, next: PieceKind) -> Option<Move> {
    let first_moves = enumerate_on_board(board, kind);

    let mut best: Option<(usize, f64)> = None;
    for (i, first) in first_moves.iter().enumerate() {
        let Some(reply) = best_of(enumerate_on_board(&first.board, next)) else {
            continue;
        };
        if best.map_or(true, |(_, score)| reply.score > score) {
            best = Some((i, reply.score));
        }
    }

    match best {
        Some((i, score)) => {
            let mut chosen = first_moves.into_iter().nth(i)?;
            chosen.score = score;
            tracing::trace!(x = chosen.x, rotation = chosen.rotation.index(), score, "lookahead pick");
            Some(chosen)
        }
        None => first_moves.into_iter().next(),
    }
}

fn best_of(moves: Vec<Move>) -> Option<Move> {
    let mut best: Option<Move> = None;
    for candidate in moves {
        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_range_matches_fixed_margin_on_default_width() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let range = column_range(kind, rotation, 10);
                assert!(*range.start() >= -3);
                assert!(*range.end() <= 12);
                // Nothing outside the derived range can fit.
                let board = Board::new(10, 20);
                for x in -3..=12 {
                    let fits = !board.collides(kind, x, 10, rotation);
                    assert_eq!(fits, range.contains(&x), "{:?} {:?} x={}", kind, rotation, x);
                }
            }
        }
    }

    #[test]
    fn resting_row_on_empty_board() {
        let board = Board::new(10, 20);
        // O occupies rows y and y+1.
        assert_eq!(resting_row(&board, PieceKind::O, 0, Rotation::North), 18);
        // I North sits on its second mask row.
        assert_eq!(resting_row(&board, PieceKind::I, 0, Rotation::North), 18);
    }

    #[test]
    fn enumeration_counts_on_empty_board() {
        let board = Board::new(10, 20);
        // O: 9 columns in each of 4 identical rotations.
        assert_eq!(enumerate_on_board(&board, PieceKind::O).len(), 36);
        // I: horizontal 7 columns, vertical 10 columns, twice.
        assert_eq!(enumerate_on_board(&board, PieceKind::I).len(), 34);
    }

    #[test]
    fn enumerated_boards_hold_exactly_four_new_cells() {
        let board = Board::from_rows(&[
            "......",
            "......",
            "......",
            "......",
            "z.....",
            "zz..ss",
        ]);
        let before = board.cells().iter().filter(|c| c.is_some()).count();
        for m in enumerate_on_board(&board, PieceKind::T) {
            let after = m.board.cells().iter().filter(|c| c.is_some()).count();
            assert_eq!(after, before + 4);
            assert!(!board.collides(m.kind, m.x, m.y, m.rotation));
            assert!(board.collides(m.kind, m.x, m.y + 1, m.rotation));
        }
    }

    #[test]
    fn best_of_keeps_first_on_ties() {
        let board = Board::new(4, 4);
        let moves = enumerate_on_board(&board, PieceKind::O);
        let first = moves[0].clone();
        let best = best_of(moves).unwrap();
        assert_eq!((best.x, best.rotation), (first.x, first.rotation));
    }
}
