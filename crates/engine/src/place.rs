use thiserror::Error;

use crate::core::GameState;
use crate::search::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is not playable")]
    NotPlayable,
    #[error("move is for a different piece than the active one")]
    WrongPiece,
    #[error("target position collides with the board")]
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::WrongPiece | PlaceError::Blocked => "invalid_place",
        }
    }
}

/// Commit a searched move: put the active piece at the move's position,
/// then run one gravity step so it locks.
///
/// The move's row is expected to be a resting row on the live board; if it
/// is not, the gravity step only lowers the piece by one.
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<(), PlaceError> {
    if state.paused() || state.game_over() {
        return Err(PlaceError::NotPlayable);
    }
    if state.current().kind != mv.kind {
        return Err(PlaceError::WrongPiece);
    }
    if !state.place_active(mv.x, mv.y, mv.rotation) {
        return Err(PlaceError::Blocked);
    }

    state.drop_piece();
    Ok(())
}
