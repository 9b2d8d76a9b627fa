use crate::board::Board;
use crate::types::PieceKind;

/// Read-only view of a game for renderers
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells with the falling piece drawn in
    pub board: Board,
    pub next: PieceKind,
    pub score: u32,
    pub visual_score: u32,
    pub rows: u32,
    pub drop_interval: f64,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
