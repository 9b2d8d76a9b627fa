//! Terminal input module.
//!
//! Maps `crossterm` key events into [`InputCommand`]s for the game loop. The
//! mapping depends only on whether the game is running, paused or over, so it
//! stays independent of any UI framework.

pub mod map;

pub use heuristic_tetris_types as types;

pub use map::{map_key, should_quit, InputCommand, KeyContext};
