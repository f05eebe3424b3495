//! Turn sequencing and game state.
//!
//! `Game` owns the current board and side to move, detects forced passes
//! and game over, validates incoming moves, and keeps the one-slot snapshot
//! that backs single-step undo. It is the only mutation point the embedding
//! layer sees; all board math is delegated to `movegen`.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Side, Square};
use crate::movegen::{apply, game_over, legal_moves, Move};
use crate::search::{choose_move, Difficulty};

/// Errors surfaced by the turn controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move")]
    IllegalMove,

    #[error("game is already over")]
    GameOver,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("no move available for the automated side")]
    NoMoveAvailable,
}

/// Whose turn it is, or terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Turn(Side),
    Over,
}

/// Final disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub black: u32,
    pub white: u32,
}

impl GameResult {
    /// The winning side, or `None` on a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// What happened when a move was applied: the placed disc, the discs it
/// flipped, and any forced passes before the next side could move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub mover: Side,
    pub mv: Move,
    /// Sides that had to pass after the move, in order.
    pub passes: Vec<Side>,
}

/// One-step undo snapshot: the board and mover before the last move.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    to_move: Side,
}

/// A running game: board, side to move, terminal status, undo slot.
pub struct Game {
    board: Board,
    to_move: Side,
    status: Status,
    snapshot: Option<Snapshot>,
}

impl Game {
    /// Starts a new game from the standard initial position, black to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            to_move: Side::Black,
            status: Status::Turn(Side::Black),
            snapshot: None,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        match self.status {
            Status::Turn(side) => Some(side),
            Status::Over => None,
        }
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.status {
            Status::Turn(side) => legal_moves(&self.board, side),
            Status::Over => Vec::new(),
        }
    }

    /// Final disc counts (valid at any point, decisive once `Over`).
    pub fn result(&self) -> GameResult {
        GameResult {
            black: self.board.count(Side::Black),
            white: self.board.count(Side::White),
        }
    }

    /// Applies the current side's move at `target`, which must be one of
    /// `legal_moves()`. Rejects illegal moves without touching any state.
    pub fn play(&mut self, target: Square) -> Result<PlayOutcome, GameError> {
        let Status::Turn(side) = self.status else {
            return Err(GameError::GameOver);
        };

        let mv = legal_moves(&self.board, side)
            .into_iter()
            .find(|m| m.square == target)
            .ok_or(GameError::IllegalMove)?;

        Ok(self.commit(side, mv))
    }

    /// Lets the search pick and apply a move for the side to move.
    ///
    /// The pass loop guarantees the mover has a legal move here; if the
    /// search still comes back empty the turn is forced over to the
    /// opponent and the anomaly is reported.
    pub fn auto_play(
        &mut self,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Result<PlayOutcome, GameError> {
        let Status::Turn(side) = self.status else {
            return Err(GameError::GameOver);
        };

        match choose_move(&self.board, side, difficulty, rng) {
            Some(mv) => Ok(self.commit(side, mv)),
            None => {
                debug_assert!(false, "side to move has no legal moves");
                self.to_move = side.opponent();
                self.advance();
                Err(GameError::NoMoveAvailable)
            }
        }
    }

    /// Restores the board and side to move from the last snapshot.
    /// The snapshot is consumed: only one undo step is ever available.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.snapshot.take().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot.board;
        self.to_move = snapshot.to_move;
        // Snapshots are taken just before an accepted move, so the restored
        // mover is known to have at least one legal move.
        self.status = Status::Turn(snapshot.to_move);
        Ok(())
    }

    /// Records the snapshot, applies the move, hands the turn over, and
    /// runs the pass loop.
    fn commit(&mut self, side: Side, mv: Move) -> PlayOutcome {
        self.snapshot = Some(Snapshot {
            board: self.board,
            to_move: side,
        });
        self.board = apply(&self.board, side, &mv);
        self.to_move = side.opponent();
        let passes = self.advance();
        PlayOutcome {
            mover: side,
            mv,
            passes,
        }
    }

    #[cfg(test)]
    fn set_position_for_test(&mut self, board: Board, to_move: Side) -> Vec<Side> {
        self.board = board;
        self.to_move = to_move;
        self.snapshot = None;
        self.advance()
    }

    /// Settles whose turn it actually is: detects game over, and passes
    /// the turn while the nominal mover has no legal move. A single pass is
    /// never final; the other side is always re-checked.
    fn advance(&mut self) -> Vec<Side> {
        let mut passes = Vec::new();
        loop {
            if game_over(&self.board) {
                self.status = Status::Over;
                return passes;
            }
            if legal_moves(&self.board, self.to_move).is_empty() {
                passes.push(self.to_move);
                self.to_move = self.to_move.opponent();
            } else {
                self.status = Status::Turn(self.to_move);
                return passes;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_game_starts_with_black_and_four_moves() {
        let game = Game::new();
        assert_eq!(game.status(), Status::Turn(Side::Black));
        assert_eq!(game.to_move(), Some(Side::Black));
        assert_eq!(game.legal_moves().len(), 4);
        assert_eq!(game.result(), GameResult { black: 2, white: 2 });
    }

    #[test]
    fn play_applies_and_hands_over_the_turn() {
        let mut game = Game::new();
        let outcome = game.play(sq(2, 3)).unwrap();

        assert_eq!(outcome.mover, Side::Black);
        assert_eq!(outcome.mv.flips, vec![sq(3, 3)]);
        assert!(outcome.passes.is_empty());
        assert_eq!(game.to_move(), Some(Side::White));
        assert_eq!(game.result(), GameResult { black: 4, white: 1 });
    }

    #[test]
    fn illegal_move_is_rejected_without_state_change() {
        let mut game = Game::new();
        let before = *game.board();

        assert_eq!(game.play(sq(0, 0)), Err(GameError::IllegalMove));
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Some(Side::Black));
        // And undo must not have gained a snapshot from the rejected move.
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn undo_restores_exactly_one_step() {
        let mut game = Game::new();
        game.play(sq(2, 3)).unwrap();

        game.undo().unwrap();
        assert_eq!(*game.board(), Board::initial());
        assert_eq!(game.to_move(), Some(Side::Black));

        // Snapshot is consumed: a second undo fails.
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn snapshot_is_overwritten_by_each_move() {
        let mut game = Game::new();
        game.play(sq(2, 3)).unwrap();
        let mut rng = SmallRng::seed_from_u64(4);
        let after_black = *game.board();
        game.auto_play(Difficulty::Basic, &mut rng).unwrap();

        game.undo().unwrap();
        assert_eq!(*game.board(), after_black);
        assert_eq!(game.to_move(), Some(Side::White));
    }

    #[test]
    fn auto_play_picks_a_legal_move() {
        let mut game = Game::new();
        game.play(sq(2, 3)).unwrap();

        let mut rng = SmallRng::seed_from_u64(8);
        let outcome = game.auto_play(Difficulty::Advanced, &mut rng).unwrap();
        assert_eq!(outcome.mover, Side::White);
        assert!(!outcome.mv.flips.is_empty());
        assert_eq!(game.to_move(), Some(Side::Black));
    }

    #[test]
    fn game_over_on_a_full_board() {
        let mut game = Game::new();
        let mut rng = SmallRng::seed_from_u64(21);

        // Play a full game with both sides automated.
        let mut plies = 0;
        while game.to_move().is_some() {
            game.auto_play(Difficulty::Basic, &mut rng).unwrap();
            plies += 1;
            assert!(plies <= 60, "a game cannot exceed 60 moves");
        }

        assert_eq!(game.status(), Status::Over);
        assert!(game.legal_moves().is_empty());
        let result = game.result();
        assert!(result.black + result.white <= 64);
    }

    #[test]
    fn moveless_side_passes_without_board_change() {
        // WBB. on the top row: black to move must pass, white can play.
        let mut board = Board::empty();
        board.set(sq(0, 0), Some(Side::White));
        board.set(sq(0, 1), Some(Side::Black));
        board.set(sq(0, 2), Some(Side::Black));

        let mut game = Game::new();
        let passes = game.set_position_for_test(board, Side::Black);

        assert_eq!(passes, vec![Side::Black]);
        assert_eq!(game.status(), Status::Turn(Side::White));
        assert_eq!(*game.board(), board);
    }

    #[test]
    fn winner_compares_disc_counts() {
        assert_eq!(GameResult { black: 34, white: 30 }.winner(), Some(Side::Black));
        assert_eq!(GameResult { black: 20, white: 44 }.winner(), Some(Side::White));
        assert_eq!(GameResult { black: 32, white: 32 }.winner(), None);
    }

    #[test]
    fn play_after_game_over_is_rejected() {
        let mut game = Game::new();
        let mut rng = SmallRng::seed_from_u64(13);
        while game.to_move().is_some() {
            game.auto_play(Difficulty::Basic, &mut rng).unwrap();
        }

        assert_eq!(game.play(sq(0, 0)), Err(GameError::GameOver));
        let err = game.auto_play(Difficulty::Basic, &mut rng).unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }
}
