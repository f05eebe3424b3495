//! Legal move generation.
//!
//! Enumerates the legal placements for a side by scanning every empty
//! square against the eight compass directions, and applies accepted moves
//! as pure board-to-board transformations.

use crate::board::{Board, Side, Square, ALL_SIDES};

/// The eight compass directions as (row, col) deltas.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A legal placement: the target square and the opponent discs it flips.
///
/// A move is only meaningful for the `(board, side)` pair it was generated
/// from; it is recomputed per position, never cached across board states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub square: Square,
    /// Flipped squares in direction-scan order. Never empty for a legal move.
    pub flips: Vec<Square>,
}

/// Collects the discs that placing `side` on `square` would flip.
///
/// For each direction, walks outward over contiguous opponent discs; the run
/// counts only if it is terminated by one of `side`'s own discs. Returns an
/// empty vector when the square is occupied or flips nothing (not a legal
/// move).
pub fn scan_flips(board: &Board, side: Side, square: Square) -> Vec<Square> {
    if board.get(square).is_some() {
        return Vec::new();
    }

    let opponent = side.opponent();
    let mut flips = Vec::new();

    for (dr, dc) in DIRECTIONS {
        let mut cursor = square.offset(dr, dc);
        let run_start = flips.len();

        while let Some(sq) = cursor {
            match board.get(sq) {
                Some(s) if s == opponent => {
                    flips.push(sq);
                    cursor = sq.offset(dr, dc);
                }
                Some(_) => break,
                None => {
                    // Run hit an empty square: discard it.
                    flips.truncate(run_start);
                    break;
                }
            }
        }

        // Ran off the board without closing the line.
        if cursor.is_none() {
            flips.truncate(run_start);
        }
    }

    flips
}

/// Enumerates the legal moves for `side`, in row-major order of target
/// square. Every returned move has a non-empty flip set.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for square in Square::all() {
        if board.get(square).is_some() {
            continue;
        }
        let flips = scan_flips(board, side, square);
        if !flips.is_empty() {
            moves.push(Move { square, flips });
        }
    }
    moves
}

/// Applies a move for `side`, returning the resulting board. Pure: the
/// input board is untouched.
///
/// The move must have been generated from exactly this `(board, side)` pair;
/// callers validate against `legal_moves` before applying.
pub fn apply(board: &Board, side: Side, mv: &Move) -> Board {
    let mut next = *board;
    next.set(mv.square, Some(side));
    for &sq in &mv.flips {
        next.set(sq, Some(side));
    }
    next
}

/// Returns true iff neither side has a legal move.
pub fn game_over(board: &Board) -> bool {
    ALL_SIDES.iter().all(|&s| legal_moves(board, s).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn initial_black_moves_are_the_four_expected_squares() {
        let board = Board::initial();
        let moves = legal_moves(&board, Side::Black);

        let squares: Vec<Square> = moves.iter().map(|m| m.square).collect();
        assert_eq!(squares, vec![sq(2, 3), sq(3, 2), sq(4, 5), sq(5, 4)]);
        for m in &moves {
            assert_eq!(m.flips.len(), 1, "each opening move flips one disc");
        }
    }

    #[test]
    fn scan_flips_rejects_occupied_square() {
        let board = Board::initial();
        assert!(scan_flips(&board, Side::Black, sq(3, 3)).is_empty());
    }

    #[test]
    fn scan_flips_rejects_empty_square_with_no_line() {
        let board = Board::initial();
        assert!(scan_flips(&board, Side::Black, sq(0, 0)).is_empty());
    }

    #[test]
    fn open_ended_run_does_not_flip() {
        // .WW. : the white run ends on an empty square, so nothing flips.
        let mut board = Board::empty();
        board.set(sq(0, 1), Some(Side::White));
        board.set(sq(0, 2), Some(Side::White));

        assert!(scan_flips(&board, Side::Black, sq(0, 0)).is_empty());
    }

    #[test]
    fn run_off_the_edge_does_not_flip() {
        // White run reaching the right edge has no closing disc.
        let mut board = Board::empty();
        for col in 4..8 {
            board.set(sq(0, col), Some(Side::White));
        }

        assert!(scan_flips(&board, Side::Black, sq(0, 3)).is_empty());
    }

    #[test]
    fn flips_accumulate_across_directions() {
        // White discs on both sides of the placement, each closed by black.
        let mut board = Board::empty();
        board.set(sq(3, 1), Some(Side::Black));
        board.set(sq(3, 2), Some(Side::White));
        board.set(sq(3, 4), Some(Side::White));
        board.set(sq(3, 5), Some(Side::Black));

        let flips = scan_flips(&board, Side::Black, sq(3, 3));
        assert_eq!(flips.len(), 2);
        assert!(flips.contains(&sq(3, 2)));
        assert!(flips.contains(&sq(3, 4)));
    }

    #[test]
    fn apply_flips_and_leaves_input_unchanged() {
        let board = Board::initial();
        let moves = legal_moves(&board, Side::Black);
        let mv = moves.iter().find(|m| m.square == sq(2, 3)).unwrap();

        let next = apply(&board, Side::Black, mv);

        assert_eq!(mv.flips, vec![sq(3, 3)]);
        assert_eq!(next.count(Side::Black), 4);
        assert_eq!(next.count(Side::White), 1);
        assert_eq!(next.get(sq(2, 3)), Some(Side::Black));
        assert_eq!(next.get(sq(3, 3)), Some(Side::Black));
        // Input board untouched.
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn apply_is_deterministic() {
        let board = Board::initial();
        let mv = &legal_moves(&board, Side::Black)[0];
        assert_eq!(apply(&board, Side::Black, mv), apply(&board, Side::Black, mv));
    }

    #[test]
    fn apply_adds_exactly_one_disc() {
        let mut board = Board::initial();
        let mut side = Side::Black;
        for _ in 0..12 {
            let moves = legal_moves(&board, side);
            let Some(mv) = moves.first() else {
                side = side.opponent();
                continue;
            };
            let before = board.total_discs();
            board = apply(&board, side, mv);
            assert_eq!(board.total_discs(), before + 1);
            side = side.opponent();
        }
    }

    #[test]
    fn legal_moves_and_scan_flips_agree() {
        let board = Board::initial();
        for side in ALL_SIDES {
            let moves = legal_moves(&board, side);
            for square in Square::all() {
                if board.get(square).is_some() {
                    continue;
                }
                let flips = scan_flips(&board, side, square);
                let listed = moves.iter().any(|m| m.square == square);
                assert_eq!(listed, !flips.is_empty());
            }
        }
    }

    #[test]
    fn full_board_is_game_over() {
        let mut board = Board::empty();
        for square in Square::all() {
            board.set(square, Some(Side::White));
        }
        assert!(game_over(&board));
    }

    #[test]
    fn one_sided_stalemate_is_not_game_over() {
        // WBB. on the top row: black has no move, white can play (0,3).
        let mut board = Board::empty();
        board.set(sq(0, 0), Some(Side::White));
        board.set(sq(0, 1), Some(Side::Black));
        board.set(sq(0, 2), Some(Side::Black));

        assert!(legal_moves(&board, Side::Black).is_empty());
        let white_moves = legal_moves(&board, Side::White);
        assert_eq!(white_moves.len(), 1);
        assert_eq!(white_moves[0].square, sq(0, 3));
        assert!(!game_over(&board));
    }
}
