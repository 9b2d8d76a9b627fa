//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that filled it. Cells live in a flat row-major vector.
//! Coordinates: `(x, y)` with `x` growing left to right and `y` growing top to
//! bottom; row 0 is the top row.

use crate::pieces::{blocks_of, BlockPos};
use crate::types::{Cell, PieceKind, Rotation};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16
    }

    /// Collision test for a whole piece
    ///
    /// True if any block is out of bounds or lands on a filled cell. Bounds
    /// are checked before any cell is read.
    pub fn collides(&self, kind: PieceKind, x: i16, y: i16, rotation: Rotation) -> bool {
        blocks_of(kind, x, y, rotation)
            .iter()
            .any(|&(bx, by)| !self.is_valid(bx, by))
    }

    /// Write blocks into the board; out-of-bounds blocks are skipped
    pub fn fill_blocks(&mut self, blocks: &[BlockPos], kind: PieceKind) {
        for &(x, y) in blocks {
            self.set(x, y, Some(kind));
        }
    }

    /// Copy of this board with a piece written in
    pub fn with_piece(&self, kind: PieceKind, x: i16, y: i16, rotation: Rotation) -> Board {
        let mut board = self.clone();
        board.fill_blocks(&blocks_of(kind, x, y, rotation), kind);
        board
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row, left to right; empty if `y` is out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // A zero-width board has no cells, so any nonzero chunk size yields nothing.
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Remove a row and shift all rows above it down by one
    ///
    /// The top row becomes empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }
        let width = self.width as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(None);
    }

    /// Remove every full row and return how many were removed
    ///
    /// Scans bottom to top. After a removal the same row index is examined
    /// again, since the row above has just shifted into it.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of full rows, without removing them
    pub fn count_full_rows(&self) -> u32 {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .count() as u32
    }

    /// Height of a column: rows from the bottom up to its topmost filled cell
    ///
    /// Out-of-range columns have height 0.
    pub fn column_height(&self, x: usize) -> u32 {
        if x >= self.width as usize {
            return 0;
        }
        let height = self.height as usize;
        (0..height)
            .find(|&y| self.cells[y * self.width as usize + x].is_some())
            .map(|y| (height - y) as u32)
            .unwrap_or(0)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Build a board from text rows, top to bottom; `.` is empty, any other
    /// character is a filled cell
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u8;
        let mut board = Board::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                    board.set(x as i16, y as i16, Some(kind));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
