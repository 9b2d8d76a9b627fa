//! Board evaluation - classic four-feature heuristic
//!
//! Column height is measured from the bottom to the topmost filled cell
//! (0 for an empty column). A hole is an empty cell with a filled cell
//! anywhere above it in the same column.

use crate::core::Board;

pub const AGGREGATE_HEIGHT_WEIGHT: f64 = -0.51;
pub const COMPLETE_LINES_WEIGHT: f64 = 0.76;
pub const HOLES_WEIGHT: f64 = -0.36;
pub const BUMPINESS_WEIGHT: f64 = -0.18;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub aggregate_height: u32,
    pub complete_lines: u32,
    pub holes: u32,
    pub bumpiness: u32,
}

impl BoardFeatures {
    /// Weighted sum of the features
    pub fn score(&self) -> f64 {
        AGGREGATE_HEIGHT_WEIGHT * self.aggregate_height as f64
            + COMPLETE_LINES_WEIGHT * self.complete_lines as f64
            + HOLES_WEIGHT * self.holes as f64
            + BUMPINESS_WEIGHT * self.bumpiness as f64
    }
}

/// Compute the features of a locked board. O(W*H), one heights buffer.
pub fn compute_features(board: &Board) -> BoardFeatures {
    let heights: Vec<u32> = (0..board.width() as usize)
        .map(|x| board.column_height(x))
        .collect();

    BoardFeatures {
        aggregate_height: heights.iter().sum(),
        complete_lines: board.count_full_rows(),
        holes: count_holes(board, &heights),
        bumpiness: bumpiness(&heights),
    }
}

/// Heuristic score of a board; higher is better
pub fn evaluate(board: &Board) -> f64 {
    compute_features(board).score()
}

fn count_holes(board: &Board, heights: &[u32]) -> u32 {
    let h = board.height() as i16;
    let mut holes = 0;
    for (x, &col_h) in heights.iter().enumerate() {
        if col_h == 0 {
            continue;
        }
        let top = h - col_h as i16;
        holes += (top..h)
            .filter(|&y| board.is_valid(x as i16, y))
            .count() as u32;
    }
    holes
}

fn bumpiness(heights: &[u32]) -> u32 {
    heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .sum()
}
