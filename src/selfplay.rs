//! Arena self-play.
//!
//! Plays complete games between two configured difficulties and records
//! the outcomes, for gauging relative strategy strength. Games are
//! independent: each owns its `Game` and its own seeded RNG, so runs are
//! reproducible for a fixed seed and safe to parallelize.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::Side;
use crate::game::{Game, GameError};
use crate::protocol::format_square;
use crate::search::Difficulty;

/// Configuration for an arena run.
#[derive(Clone)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Strategy playing black.
    pub black: Difficulty,
    /// Strategy playing white.
    pub white: Difficulty,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads.
    pub threads: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            num_games: 10,
            black: Difficulty::Basic,
            white: Difficulty::Advanced,
            seed: 0,
            threads: 1,
        }
    }
}

/// Record of a single completed game.
#[derive(Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// `"black"`, `"white"`, or `"draw"`.
    pub winner: String,
    pub black_count: u32,
    pub white_count: u32,
    /// Applied moves in coordinate notation, in order.
    pub moves: Vec<String>,
    /// Number of forced passes over the whole game.
    pub passes: usize,
}

/// Aggregate results of an arena run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSummary {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

/// Plays one game to completion and records it.
pub fn play_game(
    game_id: usize,
    black: Difficulty,
    white: Difficulty,
    rng: &mut impl Rng,
) -> GameRecord {
    let mut game = Game::new();
    let mut moves = Vec::new();
    let mut passes = 0usize;

    while let Some(side) = game.to_move() {
        let difficulty = match side {
            Side::Black => black,
            Side::White => white,
        };
        match game.auto_play(difficulty, rng) {
            Ok(outcome) => {
                moves.push(format_square(outcome.mv.square));
                passes += outcome.passes.len();
            }
            // Unreachable under the controller's pass loop; recorded games
            // stay well-formed either way.
            Err(GameError::NoMoveAvailable) => passes += 1,
            Err(_) => break,
        }
    }

    let result = game.result();
    let winner = match result.winner() {
        Some(side) => side.name().to_string(),
        None => "draw".to_string(),
    };

    GameRecord {
        game_id,
        winner,
        black_count: result.black,
        white_count: result.white,
        moves,
        passes,
    }
}

/// Runs the configured number of games, in parallel when
/// `config.threads > 1`. Records come back ordered by game ID.
pub fn run_arena(config: &ArenaConfig) -> Vec<GameRecord> {
    let base_seed = if config.seed == 0 {
        SmallRng::from_entropy().gen()
    } else {
        config.seed
    };

    let play_one = |game_id: usize| {
        let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(game_id as u64));
        play_game(game_id, config.black, config.white, &mut rng)
    };

    if config.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .expect("failed to build rayon thread pool");
        pool.install(|| (0..config.num_games).into_par_iter().map(play_one).collect())
    } else {
        (0..config.num_games).map(play_one).collect()
    }
}

/// Tallies wins and draws over a set of records.
pub fn summarize(records: &[GameRecord]) -> ArenaSummary {
    let mut summary = ArenaSummary::default();
    for record in records {
        match record.winner.as_str() {
            "black" => summary.black_wins += 1,
            "white" => summary.white_wins += 1,
            _ => summary.draws += 1,
        }
    }
    summary
}
