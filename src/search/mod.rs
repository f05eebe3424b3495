//! Move selection for the automated side.
//!
//! Two strategies share an immediate-corner shortcut: `Basic` plays the
//! greedy flip-count heuristic, `Advanced` runs a depth-limited negamax
//! with alpha-beta pruning. Randomized tie-breaking always goes through a
//! caller-supplied RNG so tests can fix the seed.

pub mod greedy;
pub mod negamax;

use rand::Rng;

use crate::board::{Board, Side};
use crate::eval::positional_weight;
use crate::movegen::Move;

/// Strength setting for the automated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Basic,
    Advanced,
}

impl Difficulty {
    /// Parses the protocol name, `"basic"` or `"advanced"`.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "basic" => Some(Difficulty::Basic),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    /// Returns the protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Selects a move for `side`, or `None` when no legal move exists.
pub fn choose_move(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<Move> {
    match difficulty {
        Difficulty::Basic => greedy::pick_move(board, side, rng),
        Difficulty::Advanced => negamax::pick_move(board, side, rng),
    }
}

/// Picks uniformly at random among the corner moves in `moves`, if any.
/// Corners are unconditionally best: a corner disc can never be flipped back.
pub(crate) fn random_corner(moves: &[Move], rng: &mut impl Rng) -> Option<Move> {
    let corners: Vec<&Move> = moves.iter().filter(|m| m.square.is_corner()).collect();
    if corners.is_empty() {
        None
    } else {
        Some(corners[rng.gen_range(0..corners.len())].clone())
    }
}

/// Move-ordering heuristic for the negamax search: stronger-looking moves
/// first tighten the alpha-beta window sooner.
pub(crate) fn ordering_score(mv: &Move) -> i32 {
    mv.flips.len() as i32 * 4 + positional_weight(mv.square)
}
