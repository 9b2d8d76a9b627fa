//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the search agent, the terminal view and the binaries alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top row.
//! Other sizes are accepted through `GameConfig` in the core crate.
//!
//! # Timing Constants
//!
//! Timing values are in seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_INTERVAL_SECS` | 0.6 | Gravity with no rows cleared |
//! | `DROP_INTERVAL_DECREMENT_SECS` | 0.005 | Speed-up per cleared row |
//! | `MIN_DROP_INTERVAL_SECS` | 0.1 | Fastest gravity |
//!
//! # Examples
//!
//! ```
//! use heuristic_tetris_types::{GameAction, PieceKind, Rotation, DEFAULT_BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board side (the I piece spans 4 cells)
pub const MIN_BOARD_SIDE: u8 = 4;

/// Seconds per gravity step before any rows are cleared
pub const BASE_DROP_INTERVAL_SECS: f64 = 0.6;

/// Seconds removed from the drop interval per cleared row
pub const DROP_INTERVAL_DECREMENT_SECS: f64 = 0.005;

/// Floor for the drop interval
pub const MIN_DROP_INTERVAL_SECS: f64 = 0.1;

/// Points awarded every time a piece locks
pub const PLACEMENT_BONUS: u32 = 10;

/// Points for a single cleared row; doubles for every extra row in the same lock
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// Copies of each kind in one bag (7 kinds x 4 = 28 pieces)
pub const BAG_COPIES_PER_KIND: usize = 4;

/// Pieces in a full bag
pub const BAG_SIZE: usize = BAG_COPIES_PER_KIND * PieceKind::ALL.len();

/// Frame rate of the interactive loop
pub const TARGET_FPS: u32 = 60;

/// The seven tetromino piece kinds
///
/// Declaration order matches the catalog order used by the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use heuristic_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Rotation states, indexed 0..=3
///
/// The cycle goes North → East → South → West → North. Rotation is always
/// clockwise; there is no wall-kick table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use heuristic_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Index into a shape's rotation table
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Inverse of [`Rotation::index`], wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Player actions accepted by the pending-action queue
///
/// Used by both keyboard input and scripted drivers. `Down` is a gravity step:
/// it moves the piece one row or locks it when it has landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop one row, locking on landing
    Down,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "rotate" => Some(GameAction::Rotate),
            "down" => Some(GameAction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Rotate => "rotate",
            GameAction::Down => "down",
        }
    }
}

/// Translation directions for a direct move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Column/row delta for this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
