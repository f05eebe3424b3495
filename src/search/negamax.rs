//! Negamax search with alpha-beta pruning (the "advanced" strategy).
//!
//! Depth-limited negamax rooted at the automated side, with leaf positions
//! always evaluated from the root side's perspective so values compose
//! across the negation at each ply. A forced pass recurses one ply with the
//! bounds swapped and the result negated. Depth grows as the board fills,
//! since the shrinking tree makes deeper search affordable.

use rand::Rng;

use crate::board::{Board, Side};
use crate::eval::evaluate;
use crate::movegen::{apply, game_over, legal_moves, Move};

use super::{ordering_score, random_corner};

/// Score bound well outside any reachable evaluation.
const SCORE_INF: i32 = 1_000_000;

/// Search depth by game phase: deeper once the branching tree shrinks.
fn depth_for(total_discs: u32) -> u32 {
    if total_discs >= 52 {
        6
    } else if total_discs >= 42 {
        5
    } else {
        4
    }
}

/// Picks a move for `side`, or `None` when no legal move exists.
///
/// An immediate corner is taken without searching. Otherwise root moves are
/// visited in descending heuristic order under a strict alpha-beta window;
/// value ties keep the first move found.
pub fn pick_move(board: &Board, side: Side, rng: &mut impl Rng) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    if let Some(corner) = random_corner(&moves, rng) {
        return Some(corner);
    }

    let depth = depth_for(board.total_discs());

    let mut ordered = moves;
    ordered.sort_by_key(|m| std::cmp::Reverse(ordering_score(m)));

    let mut best_value = -SCORE_INF;
    let mut best_move = None;
    let mut alpha = -SCORE_INF;
    let beta = SCORE_INF;

    for mv in ordered {
        let child = apply(board, side, &mv);
        let value = -negamax(&child, side.opponent(), depth - 1, -beta, -alpha, side);
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
        if best_value > alpha {
            alpha = best_value;
        }
        if alpha >= beta {
            break;
        }
    }

    best_move
}

/// Recursive negamax over owned board copies.
///
/// `perspective` is the fixed root side: leaves are always scored for it,
/// and each ply negates the child value. Returns the best achievable value
/// within `(alpha, beta)`; siblings are cut once `alpha >= beta`.
fn negamax(
    board: &Board,
    to_move: Side,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    perspective: Side,
) -> i32 {
    if depth == 0 || game_over(board) {
        return evaluate(board, perspective);
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        // Forced pass: costs a ply, keeps the perspective consistent.
        return -negamax(board, to_move.opponent(), depth - 1, -beta, -alpha, perspective);
    }

    let mut ordered = moves;
    ordered.sort_by_key(|m| std::cmp::Reverse(ordering_score(m)));

    let mut best = -SCORE_INF;
    for mv in ordered {
        let child = apply(board, to_move, &mv);
        let value = -negamax(&child, to_move.opponent(), depth - 1, -beta, -alpha, perspective);
        if value > best {
            best = value;
        }
        if value > alpha {
            alpha = value;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
