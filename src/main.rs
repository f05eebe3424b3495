//! Turncoat -- an Othello engine speaking a line-oriented text protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! All game logic lives in the library; this loop only translates between
//! text and the engine's interfaces.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use turncoat::game::{Game, GameError, PlayOutcome, Status};
use turncoat::protocol::{format_square, parse_command, render_board, Command};
use turncoat::search::Difficulty;

/// Reports an applied move plus any passes and game-over that followed.
fn report_outcome<W: Write>(out: &mut W, game: &Game, outcome: &PlayOutcome) -> io::Result<()> {
    writeln!(
        out,
        "played {} {}",
        outcome.mover.name(),
        format_square(outcome.mv.square)
    )?;
    for side in &outcome.passes {
        writeln!(out, "pass {}", side.name())?;
    }
    if game.status() == Status::Over {
        let result = game.result();
        let verdict = match result.winner() {
            Some(side) => side.name(),
            None => "draw",
        };
        writeln!(
            out,
            "gameover black {} white {} {}",
            result.black, result.white, verdict
        )?;
    }
    Ok(())
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut game = Game::new();
    let mut difficulty = Difficulty::Advanced;
    let mut rng = SmallRng::from_entropy();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::New => {
                game = Game::new();
            }
            Command::Show => {
                write!(out, "{}", render_board(game.board()))?;
                let result = game.result();
                writeln!(out, "score black {} white {}", result.black, result.white)?;
                match game.to_move() {
                    Some(side) => writeln!(out, "turn {}", side.name())?,
                    None => writeln!(out, "gameover")?,
                }
            }
            Command::Moves => {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    writeln!(out, "moves -")?;
                } else {
                    let listed: Vec<String> =
                        moves.iter().map(|m| format_square(m.square)).collect();
                    writeln!(out, "moves {}", listed.join(" "))?;
                }
            }
            Command::Play(square) => match game.play(square) {
                Ok(outcome) => report_outcome(&mut out, &game, &outcome)?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Go => match game.auto_play(difficulty, &mut rng) {
                Ok(outcome) => report_outcome(&mut out, &game, &outcome)?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Undo => match game.undo() {
                Ok(()) => writeln!(out, "undone")?,
                Err(GameError::NothingToUndo) => writeln!(out, "error nothing to undo")?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Level(level) => {
                difficulty = level;
            }
            Command::Score => {
                let result = game.result();
                writeln!(out, "score black {} white {}", result.black, result.white)?;
            }
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
