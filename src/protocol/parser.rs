//! Command parsing for the text protocol.
//!
//! One command per line, whitespace separated. Unknown or malformed lines
//! parse to `None` and are ignored by the loop.

use crate::board::Square;
use crate::search::Difficulty;

use super::notation::parse_square;

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a fresh game.
    New,
    /// `show` -- print the board, score, and whose turn it is.
    Show,
    /// `moves` -- list the legal moves for the side to move.
    Moves,
    /// `play <square>` -- apply a move for the side to move.
    Play(Square),
    /// `go` -- let the engine pick and apply a move.
    Go,
    /// `undo` -- take back the last applied move.
    Undo,
    /// `level <basic|advanced>` -- set the engine difficulty.
    Level(Difficulty),
    /// `score` -- print the disc counts.
    Score,
    /// `quit` -- exit the loop.
    Quit,
}

/// Parses a single input line into a command, or `None` if the line is
/// empty, unknown, or has malformed arguments.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    let cmd = match head {
        "new" => Command::New,
        "show" => Command::Show,
        "moves" => Command::Moves,
        "play" => Command::Play(parse_square(parts.next()?).ok()?),
        "go" => Command::Go,
        "undo" => Command::Undo,
        "level" => Command::Level(Difficulty::from_name(parts.next()?)?),
        "score" => Command::Score,
        "quit" => Command::Quit,
        _ => return None,
    };

    if parts.next().is_some() {
        return None;
    }
    Some(cmd)
}
