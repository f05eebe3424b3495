//! Board representation and game-state types.
//!
//! Contains the core data structures for sides, squares, and the 8x8
//! occupancy grid.

pub mod side;
pub mod square;
pub mod state;

pub use side::{Side, ALL_SIDES};
pub use square::{Square, BOARD_SIZE, CORNERS, SQUARE_COUNT, X_SQUARES};
pub use state::Board;
