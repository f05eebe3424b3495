//! Turncoat engine library.
//!
//! Exposes the board representation, move generation, evaluation, search,
//! and turn-controller modules for use by integration tests and the binary
//! entry points.

pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
