//! Coordinate notation and board rendering.
//!
//! Squares are written as a column letter `a`-`h` followed by a row digit
//! `1`-`8`, row 1 at the top: the four opening moves for black are
//! `d3 c4 f5 e6`. The board renders as an 8-line text diagram for the
//! `show` command.

use thiserror::Error;

use crate::board::{Board, Side, Square, BOARD_SIZE};

/// Errors that can occur when parsing square notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected two characters, got '{0}'")]
    WrongLength(String),

    #[error("unknown column '{0}', expected a-h")]
    BadColumn(char),

    #[error("unknown row '{0}', expected 1-8")]
    BadRow(char),
}

/// Formats a square as coordinate notation, e.g. `d3`.
pub fn format_square(square: Square) -> String {
    let col = (b'a' + square.col() as u8) as char;
    let row = (b'1' + square.row() as u8) as char;
    format!("{}{}", col, row)
}

/// Parses coordinate notation into a square.
pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let mut chars = text.chars();
    let (Some(col_ch), Some(row_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::WrongLength(text.to_string()));
    };

    let col = match col_ch {
        'a'..='h' => col_ch as usize - 'a' as usize,
        _ => return Err(NotationError::BadColumn(col_ch)),
    };
    let row = match row_ch {
        '1'..='8' => row_ch as usize - '1' as usize,
        _ => return Err(NotationError::BadRow(row_ch)),
    };

    Ok(Square::new(row, col))
}

/// Renders the board as a text diagram: `B`, `W`, and `.` cells with file
/// and rank labels.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  a b c d e f g h\n");
    for row in 0..BOARD_SIZE {
        out.push((b'1' + row as u8) as char);
        for col in 0..BOARD_SIZE {
            out.push(' ');
            out.push(match board.get(Square::new(row, col)) {
                Some(Side::Black) => 'B',
                Some(Side::White) => 'W',
                None => '.',
            });
        }
        out.push('\n');
    }
    out
}
