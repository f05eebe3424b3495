//! Board coordinates.
//!
//! A `Square` is an index into the 8x8 grid in row-major order: index
//! `row * 8 + col`, with row 0 at the top. Corner and X-square tables are
//! provided as constants for the evaluator and the search shortcuts.

/// Board side length.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A single square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

/// The four corner squares.
pub const CORNERS: [Square; 4] = [Square(0), Square(7), Square(56), Square(63)];

/// The four squares diagonally adjacent to a corner, in corner order.
pub const X_SQUARES: [Square; 4] = [Square(9), Square(14), Square(49), Square(54)];

impl Square {
    /// Creates a square from row and column. Debug-asserts bounds.
    pub fn new(row: usize, col: usize) -> Square {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square((row * BOARD_SIZE + col) as u8)
    }

    /// Creates a square from a row-major index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Square> {
        if index < SQUARE_COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Row-major index, 0..64.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row, 0 at the top.
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Column, 0 at the left.
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Returns true if this is one of the four corners.
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Offsets the square by a direction vector, or `None` if off-board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let r = self.row() as i32 + dr;
        let c = self.col() as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&r) && (0..BOARD_SIZE as i32).contains(&c) {
            Some(Square::new(r as usize, c as usize))
        } else {
            None
        }
    }

    /// Iterates all squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}
