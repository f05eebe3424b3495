//! The two competing sides.

/// One of the two disc colors. Black moves first in a standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

pub const ALL_SIDES: [Side; 2] = [Side::Black, Side::White];

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Contribution sign in side-agnostic sums: +1 for Black, -1 for White.
    pub const fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// Returns the lowercase name used by the text protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Black => "black",
            Side::White => "white",
        }
    }
}
