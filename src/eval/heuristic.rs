//! Heuristic position evaluation.
//!
//! Scores a board from one side's perspective by summing five handcrafted
//! terms: positional weights, corner differential, mobility differential,
//! phase-weighted disc differential, and an X-square penalty that applies
//! while any corner is still contestable.
//!
//! All terms are exact functions of the board; the score is only meaningful
//! relative to other scores computed for the same position and side.

use crate::board::{Board, Side, Square, BOARD_SIZE, CORNERS, X_SQUARES};
use crate::movegen::legal_moves;

/// Positional weight table. Corners dominate, corner-adjacent squares are
/// strongly negative, edges moderately positive, the center mildly so.
const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Disc total beyond which material becomes the decisive term.
const ENDGAME_DISCS: u32 = 54;

/// Positional weight of a square.
pub fn positional_weight(square: Square) -> i32 {
    WEIGHTS[square.row()][square.col()]
}

/// Number of corners held by a side.
fn corner_count(board: &Board, side: Side) -> i32 {
    CORNERS
        .iter()
        .filter(|&&c| board.get(c) == Some(side))
        .count() as i32
}

/// Number of legal moves available to a side.
fn mobility(board: &Board, side: Side) -> i32 {
    legal_moves(board, side).len() as i32
}

/// Evaluates `board` from `side`'s perspective; higher is better for `side`.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let opponent = side.opponent();

    // 1) Positional weights, folded to `side`'s perspective.
    let mut positional = 0;
    for square in Square::all() {
        if let Some(owner) = board.get(square) {
            positional += positional_weight(square) * owner.sign();
        }
    }
    positional *= side.sign();

    // 2) Corner differential.
    let corners = (corner_count(board, side) - corner_count(board, opponent)) * 60;

    // 3) Mobility differential.
    let moves = (mobility(board, side) - mobility(board, opponent)) * 8;

    // 4) Disc differential, weighted up once material decides the game.
    let own = board.count(side) as i32;
    let theirs = board.count(opponent) as i32;
    let total = board.total_discs();
    let material = (own - theirs) * if total > ENDGAME_DISCS { 6 } else { 1 };

    positional + corners + moves + material + x_square_penalty(board, side)
}

/// X-square term: while any corner is still empty, own discs on the squares
/// diagonally adjacent to a corner cost 25 each and opponent discs there
/// gain 10 each. Zero once every corner is settled.
fn x_square_penalty(board: &Board, side: Side) -> i32 {
    if CORNERS.iter().all(|&c| board.get(c).is_some()) {
        return 0;
    }

    let mut penalty = 0;
    for &x in X_SQUARES.iter() {
        match board.get(x) {
            Some(s) if s == side => penalty -= 25,
            Some(_) => penalty += 10,
            None => {}
        }
    }
    penalty
}
