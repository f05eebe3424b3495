//! Position evaluation.
//!
//! Scores a board from a given side's perspective using the handcrafted
//! heuristic terms in [`heuristic`]: positional weights, corners, mobility,
//! phase-weighted material, and the X-square penalty.

pub(crate) mod heuristic;

pub use heuristic::{evaluate, positional_weight};
