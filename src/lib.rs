//! Heuristic Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so binaries, integration
//! tests and benches can use `heuristic_tetris::{core,engine,input,term,types}`.

pub use heuristic_tetris_core as core;
pub use heuristic_tetris_engine as engine;
pub use heuristic_tetris_input as input;
pub use heuristic_tetris_term as term;
pub use heuristic_tetris_types as types;
