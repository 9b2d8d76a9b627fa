//! Headless driver that plays whole games with the search agent
//!
//! Each step picks a placement for the active piece, commits it, then
//! advances the game clock by one tick so queued actions and gravity keep
//! their usual meaning.

use serde::Serialize;

use crate::core::GameState;
use crate::place::apply_move;
use crate::search::{select_greedy_move, select_lookahead_move, Move};

/// Default clock advance per placement, in seconds
pub const DEFAULT_TICK_SECS: f64 = 0.01;

/// How the agent picks a placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Best board after the active piece alone
    Greedy,
    /// Best board after the active piece and the preview piece
    #[default]
    Lookahead,
}

impl Strategy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "greedy" => Some(Strategy::Greedy),
            "lookahead" => Some(Strategy::Lookahead),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Lookahead => "lookahead",
        }
    }

    /// Pick a placement for the active piece of `state`
    pub fn choose(&self, state: &GameState) -> Option<Move> {
        let current = state.current().kind;
        match self {
            Strategy::Greedy => select_greedy_move(state, current),
            Strategy::Lookahead => select_lookahead_move(state, current, state.next().kind),
        }
    }
}

/// Final numbers of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub score: u32,
    pub rows: u32,
    pub pieces: u32,
    /// True if the game stopped at the piece cap rather than by topping out
    pub capped: bool,
}

/// Totals and averages over a batch of games
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoplayReport {
    pub strategy: Strategy,
    pub games: u32,
    pub total_score: u64,
    pub total_rows: u64,
    pub avg_score: f64,
    pub avg_rows: f64,
    pub results: Vec<GameResult>,
}

impl AutoplayReport {
    fn from_results(strategy: Strategy, results: Vec<GameResult>) -> Self {
        let games = results.len() as u32;
        let total_score: u64 = results.iter().map(|r| r.score as u64).sum();
        let total_rows: u64 = results.iter().map(|r| r.rows as u64).sum();
        let (avg_score, avg_rows) = if games == 0 {
            (0.0, 0.0)
        } else {
            (
                total_score as f64 / games as f64,
                total_rows as f64 / games as f64,
            )
        };
        Self {
            strategy,
            games,
            total_score,
            total_rows,
            avg_score,
            avg_rows,
            results,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    game: GameState,
    strategy: Strategy,
    tick: f64,
    max_pieces: Option<u32>,
}

impl AutoPlayer {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            strategy: Strategy::default(),
            tick: DEFAULT_TICK_SECS,
            max_pieces: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_tick(mut self, tick: f64) -> Self {
        self.tick = tick;
        self
    }

    /// Stop each game after this many placements
    pub fn with_max_pieces(mut self, max_pieces: Option<u32>) -> Self {
        self.max_pieces = max_pieces;
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Place the active piece where the strategy says
    ///
    /// When no placement exists the piece just takes a gravity step. Returns
    /// false once the game is over.
    pub fn make_ai_move(&mut self) -> bool {
        if self.game.game_over() {
            return false;
        }
        match self.strategy.choose(&self.game) {
            Some(mv) => {
                if let Err(err) = apply_move(&mut self.game, &mv) {
                    tracing::warn!(code = err.code(), "search move rejected: {}", err);
                    self.game.drop_piece();
                }
            }
            None => {
                tracing::debug!("no placement found, dropping");
                self.game.drop_piece();
            }
        }
        !self.game.game_over()
    }

    /// Play one game from a fresh board
    pub fn play_single_game(&mut self) -> GameResult {
        self.game.reset();
        let mut pieces = 0u32;
        let mut capped = false;

        while !self.game.game_over() {
            if self.max_pieces.is_some_and(|cap| pieces >= cap) {
                capped = true;
                break;
            }
            self.make_ai_move();
            pieces += 1;
            self.game.update(self.tick);
        }

        GameResult {
            score: self.game.score(),
            rows: self.game.rows(),
            pieces,
            capped,
        }
    }

    /// Play `games` games back to back and summarize them
    pub fn play_games(&mut self, games: u32) -> AutoplayReport {
        tracing::info!(games, strategy = self.strategy.as_str(), "starting autoplay");
        let mut results = Vec::with_capacity(games as usize);
        for i in 0..games {
            let result = self.play_single_game();
            tracing::info!(
                game = i + 1,
                score = result.score,
                rows = result.rows,
                pieces = result.pieces,
                capped = result.capped,
                "game finished"
            );
            results.push(result);
        }

        let report = AutoplayReport::from_results(self.strategy, results);
        tracing::info!(
            avg_score = report.avg_score,
            avg_rows = report.avg_rows,
            "autoplay complete"
        );
        report
    }
}
