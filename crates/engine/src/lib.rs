//! Placement search agent
//!
//! Scores boards with a weighted four-feature heuristic and picks where the
//! active piece should land, either greedily or with one piece of lookahead.
//! [`autoplay`] drives whole games headlessly with it.

pub mod autoplay;
pub mod eval;
pub mod place;
pub mod search;

pub use heuristic_tetris_core as core;
pub use heuristic_tetris_types as types;

pub use autoplay::{AutoPlayer, AutoplayReport, GameResult, Strategy};
pub use eval::{compute_features, evaluate, BoardFeatures};
pub use place::{apply_move, PlaceError};
pub use search::{
    enumerate_moves, select_greedy_move, select_greedy_on_board, select_lookahead_move,
    select_lookahead_on_board, Move,
};
