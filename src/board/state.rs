//! Board state representation.
//!
//! Holds the occupancy of all 64 squares in a fixed-size array indexed by
//! `Square::index()`. The board is a plain value: search copies it freely
//! and hypothetical lines never share mutable state.

use super::side::Side;
use super::square::{Square, SQUARE_COUNT};

/// Occupancy of the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; SQUARE_COUNT],
}

impl Board {
    /// Creates a board with every square empty.
    pub fn empty() -> Self {
        Board {
            cells: [None; SQUARE_COUNT],
        }
    }

    /// Creates the standard starting position:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.set(Square::new(3, 3), Some(Side::White));
        board.set(Square::new(3, 4), Some(Side::Black));
        board.set(Square::new(4, 3), Some(Side::Black));
        board.set(Square::new(4, 4), Some(Side::White));
        board
    }

    /// Occupancy of a square.
    pub fn get(&self, square: Square) -> Option<Side> {
        self.cells[square.index()]
    }

    /// Sets the occupancy of a square.
    pub fn set(&mut self, square: Square, side: Option<Side>) {
        self.cells[square.index()] = side;
    }

    /// Number of discs held by a side.
    pub fn count(&self, side: Side) -> u32 {
        self.cells.iter().filter(|c| **c == Some(side)).count() as u32
    }

    /// Total discs on the board.
    pub fn total_discs(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_some()).count() as u32
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
