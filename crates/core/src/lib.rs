//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management. It has no
//! dependencies on UI or I/O, so it runs the same in the terminal, in the
//! headless autoplay driver and in tests.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino shapes as rotation bitmasks
//! - [`board`]: the grid, collision test and line removal
//! - [`bag`]: shuffled 28-piece supply (four of each kind)
//! - [`config`]: board size and gravity tuning
//! - [`game_state`]: active piece, scoring, action queue and drop clock
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Rotation is clockwise only, with no wall kicks
//! - A piece that cannot move down locks on the next gravity step (+10)
//! - Clearing `n` rows in one lock scores `100 * 2^(n-1)`
//! - Every cleared row shortens the drop interval down to a floor
//! - A new piece that spawns overlapping the stack ends the game
//!
//! # Example
//!
//! ```
//! use heuristic_tetris_core::GameState;
//! use heuristic_tetris_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//! game.enqueue_action(GameAction::Rotate);
//! game.enqueue_action(GameAction::Left);
//!
//! // One queued action is applied per update.
//! assert!(game.update(1.0 / 60.0));
//! assert_eq!(game.pending_actions().count(), 1);
//!
//! assert!(game.hard_drop());
//! assert_eq!(game.score(), 10);
//! ```

pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod snapshot;

pub use heuristic_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::PieceBag;
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{line_clear_score, ActivePiece, GameState};
pub use pieces::{blocks_of, column_span, get_shape, PieceShape};
pub use snapshot::GameSnapshot;
