//! Game state module - manages the complete game state
//!
//! This module ties together the board, the piece catalog and the bag. It
//! handles piece movement, rotation, locking, line clears, scoring, the
//! pending-action queue and the fixed-interval drop clock.
//!
//! Once `game_over` is set every state-changing call is a no-op until
//! [`GameState::reset`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bag::PieceBag;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::pieces::{blocks_of, get_shape, Blocks};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub x: i16,
    pub y: i16,
    pub rotation: Rotation,
}

impl ActivePiece {
    /// Create a piece at row 0 in its first rotation
    pub fn new(kind: PieceKind, x: i16) -> Self {
        Self {
            kind,
            x,
            y: 0,
            rotation: Rotation::North,
        }
    }

    /// Absolute positions of the four blocks
    pub fn blocks(&self) -> Blocks {
        blocks_of(self.kind, self.x, self.y, self.rotation)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: ActivePiece,
    next: ActivePiece,
    bag: PieceBag,
    rng: StdRng,
    score: u32,
    /// Trails `score` by at most one point per update
    visual_score: u32,
    rows: u32,
    drop_interval: f64,
    /// Seconds accumulated toward the next gravity step
    elapsed: f64,
    actions: VecDeque<GameAction>,
    game_over: bool,
    paused: bool,
}

impl GameState {
    /// Create a default-sized game with a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Create a default-sized game seeded from the OS
    pub fn new() -> Self {
        Self::build(GameConfig::default(), StdRng::from_os_rng())
    }

    /// Create a game from a validated configuration
    pub fn from_config(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: StdRng) -> Self {
        let placeholder = ActivePiece::new(PieceKind::I, 0);
        let mut state = Self {
            config,
            board: Board::new(config.width, config.height),
            current: placeholder,
            next: placeholder,
            bag: PieceBag::new(),
            rng,
            score: 0,
            visual_score: 0,
            rows: 0,
            drop_interval: config.base_drop_interval,
            elapsed: 0.0,
            actions: VecDeque::new(),
            game_over: false,
            paused: false,
        };
        state.reset();
        state
    }

    /// Reinitialize every field and draw two pieces from a fresh bag
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.width, self.config.height);
        self.score = 0;
        self.visual_score = 0;
        self.rows = 0;
        self.drop_interval = self.config.base_drop_interval;
        self.elapsed = 0.0;
        self.actions.clear();
        self.game_over = false;
        self.paused = false;

        self.bag = PieceBag::new();
        self.bag.refill(&mut self.rng);
        self.next = self.spawn_from_bag();
        self.current = self.spawn_from_bag();

        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            current = self.current.kind.as_str(),
            next = self.next.kind.as_str(),
            "game reset"
        );
    }

    /// Change the board size, then reset
    pub fn reset_with_size(&mut self, width: u8, height: u8) -> Result<(), ConfigError> {
        let config = self.config.with_size(width, height);
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Draw a kind and give it a random column where its box fits
    fn spawn_from_bag(&mut self) -> ActivePiece {
        let kind = self.bag.draw(&mut self.rng);
        let size = get_shape(kind).size;
        let max_x = self.config.width.saturating_sub(size) as i16;
        let x = self.rng.random_range(0..=max_x);
        ActivePiece::new(kind, x)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> u8 {
        self.config.width
    }

    pub fn height(&self) -> u8 {
        self.config.height
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> ActivePiece {
        self.current
    }

    pub fn next(&self) -> ActivePiece {
        self.next
    }

    pub fn bag(&self) -> &PieceBag {
        &self.bag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn visual_score(&self) -> u32 {
        self.visual_score
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Current seconds per gravity step
    pub fn drop_interval(&self) -> f64 {
        self.drop_interval
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn pending_actions(&self) -> impl Iterator<Item = &GameAction> {
        self.actions.iter()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Collision predicate shared by every movement, spawn and placement check
    pub fn is_occupied(&self, kind: PieceKind, x: i16, y: i16, rotation: Rotation) -> bool {
        self.board.collides(kind, x, y, rotation)
    }

    /// Translate the current piece by one cell
    pub fn try_move(&mut self, direction: MoveDirection) -> bool {
        if self.game_over {
            return false;
        }
        let (dx, dy) = direction.delta();
        let piece = self.current;
        let (x, y) = (piece.x + dx, piece.y + dy);
        if self.is_occupied(piece.kind, x, y, piece.rotation) {
            return false;
        }
        self.current.x = x;
        self.current.y = y;
        true
    }

    /// Rotate the current piece clockwise in place
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let piece = self.current;
        let rotation = piece.rotation.rotate_cw();
        if self.is_occupied(piece.kind, piece.x, piece.y, rotation) {
            return false;
        }
        self.current.rotation = rotation;
        true
    }

    /// Gravity step: move down one row, or lock the piece if it has landed
    ///
    /// Returns false only when this call ends the game (or the game had
    /// already ended).
    pub fn drop_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.try_move(MoveDirection::Down) {
            return true;
        }

        self.score += PLACEMENT_BONUS;
        self.lock_current();
        self.remove_lines();

        self.current = self.next;
        self.next = self.spawn_from_bag();
        self.actions.clear();

        let piece = self.current;
        if self.is_occupied(piece.kind, piece.x, piece.y, piece.rotation) {
            self.game_over = true;
            tracing::info!(score = self.score, rows = self.rows, "game over");
            return false;
        }
        true
    }

    /// Move down until blocked, then lock
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        while self.try_move(MoveDirection::Down) {}
        self.drop_piece()
    }

    /// Put the current piece at an exact position
    ///
    /// Used by automated drivers to commit a searched placement. Applied only
    /// if the target is free.
    pub fn place_active(&mut self, x: i16, y: i16, rotation: Rotation) -> bool {
        if self.game_over || self.is_occupied(self.current.kind, x, y, rotation) {
            return false;
        }
        self.current.x = x;
        self.current.y = y;
        self.current.rotation = rotation;
        true
    }

    /// End the current game without a collision
    pub fn end_game(&mut self) {
        if !self.game_over {
            self.game_over = true;
            tracing::info!(score = self.score, rows = self.rows, "game abandoned");
        }
    }

    fn lock_current(&mut self) {
        let piece = self.current;
        self.board.fill_blocks(&piece.blocks(), piece.kind);
        tracing::debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            rotation = piece.rotation.index(),
            "piece locked"
        );
    }

    fn remove_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return;
        }
        self.rows += cleared;
        self.drop_interval = self.config.drop_interval_for_rows(self.rows);
        let points = line_clear_score(cleared);
        self.score += points;
        tracing::debug!(
            cleared,
            points,
            rows = self.rows,
            drop_interval = self.drop_interval,
            "rows cleared"
        );
    }

    /// Advance the game by `dt` seconds
    ///
    /// Applies at most one pending action and at most one gravity step per
    /// call; leftover time carries to the next call. Returns false while
    /// paused or after game over.
    pub fn update(&mut self, dt: f64) -> bool {
        if self.game_over || self.paused {
            return false;
        }

        if self.visual_score < self.score {
            self.visual_score += 1;
        }

        if let Some(action) = self.actions.pop_front() {
            self.apply_action(action);
        }

        self.elapsed += dt;
        if self.elapsed > self.drop_interval {
            self.elapsed -= self.drop_interval;
            self.drop_piece();
        }

        !self.game_over
    }

    /// Apply an action immediately, bypassing the queue
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Left => self.try_move(MoveDirection::Left),
            GameAction::Right => self.try_move(MoveDirection::Right),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Down => self.drop_piece(),
        }
    }

    /// Queue an action for a later `update`
    pub fn enqueue_action(&mut self, action: GameAction) {
        if !self.game_over {
            self.actions.push_back(action);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Board copy with the current piece drawn in (omitted after game over)
    pub fn snapshot_with_active_piece(&self) -> Board {
        let mut board = self.board.clone();
        if !self.game_over {
            board.fill_blocks(&self.current.blocks(), self.current.kind);
        }
        board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.snapshot_with_active_piece(),
            next: self.next.kind,
            score: self.score,
            visual_score: self.visual_score,
            rows: self.rows,
            drop_interval: self.drop_interval,
            paused: self.paused,
            game_over: self.game_over,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Points for clearing `lines` rows in one lock: 100, 200, 400, 800, ...
pub fn line_clear_score(lines: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_CLEAR_BASE_SCORE.saturating_mul(1u32 << (lines - 1).min(31))
}
