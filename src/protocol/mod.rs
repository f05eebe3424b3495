//! Text protocol: coordinate notation, board rendering, command parsing.
//!
//! This is the engine's presentation boundary. Nothing here makes game
//! decisions; it translates between text and the core types.

pub mod notation;
pub mod parser;

pub use notation::{format_square, parse_square, render_board, NotationError};
pub use parser::{parse_command, Command};
