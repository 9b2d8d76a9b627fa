//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It skips widget
//! toolkits and renders into a plain framebuffer that is flushed to the
//! terminal with diffing.
//!
//! Board cells are drawn 2 characters wide to compensate for the aspect
//! ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use heuristic_tetris_core as core;
pub use heuristic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, PanelStatus, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
