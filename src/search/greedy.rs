//! Greedy move selection (the "basic" strategy).
//!
//! Takes a corner whenever one is on offer, otherwise maximizes
//! `flip count * 10 + positional weight`, breaking score ties uniformly at
//! random.

use rand::Rng;

use crate::board::{Board, Side};
use crate::eval::positional_weight;
use crate::movegen::{legal_moves, Move};

use super::random_corner;

/// Scores a candidate move for the greedy strategy.
fn greedy_score(mv: &Move) -> i32 {
    mv.flips.len() as i32 * 10 + positional_weight(mv.square)
}

/// Picks a move for `side`, or `None` when no legal move exists.
pub fn pick_move(board: &Board, side: Side, rng: &mut impl Rng) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    if let Some(corner) = random_corner(&moves, rng) {
        return Some(corner);
    }

    let mut best: Vec<Move> = Vec::new();
    let mut best_score = i32::MIN;
    for mv in moves {
        let score = greedy_score(&mv);
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(mv);
        } else if score == best_score {
            best.push(mv);
        }
    }

    let idx = rng.gen_range(0..best.len());
    Some(best.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::movegen::apply;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn always_takes_an_available_corner() {
        // White run from the corner along the top edge, closed by black:
        // black to move can take a1.
        let mut board = Board::initial();
        board.set(sq(0, 1), Some(Side::White));
        board.set(sq(0, 2), Some(Side::Black));

        let legal = legal_moves(&board, Side::Black);
        assert!(legal.iter().any(|m| m.square == sq(0, 0)));
        assert!(legal.len() > 1, "corner must compete with other moves");

        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..10 {
            let picked = pick_move(&board, Side::Black, &mut rng).unwrap();
            assert_eq!(picked.square, sq(0, 0));
        }
    }

    #[test]
    fn picks_the_greedy_maximizer_without_corners() {
        let board = Board::initial();
        let moves = legal_moves(&board, Side::Black);
        let best_score = moves.iter().map(greedy_score).max().unwrap();

        let mut rng = SmallRng::seed_from_u64(5);
        let picked = pick_move(&board, Side::Black, &mut rng).unwrap();
        assert_eq!(greedy_score(&picked), best_score);
    }

    #[test]
    fn tie_break_stays_within_the_tied_set() {
        // All four opening moves are symmetric and tie on the greedy score.
        let board = Board::initial();
        let moves = legal_moves(&board, Side::Black);
        let best_score = moves.iter().map(greedy_score).max().unwrap();
        let tied: Vec<Square> = moves
            .iter()
            .filter(|m| greedy_score(m) == best_score)
            .map(|m| m.square)
            .collect();
        assert_eq!(tied.len(), 4);

        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            let picked = pick_move(&board, Side::Black, &mut rng).unwrap();
            assert!(tied.contains(&picked.square));
        }
    }

    #[test]
    fn picked_move_is_applicable() {
        let board = Board::initial();
        let mut rng = SmallRng::seed_from_u64(2);
        let mv = pick_move(&board, Side::White, &mut rng).unwrap();
        let next = apply(&board, Side::White, &mv);
        assert_eq!(next.total_discs(), board.total_discs() + 1);
    }
}
