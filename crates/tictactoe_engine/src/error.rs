//! Engine error types.
//!
//! Occupied cells are not errors; they are reported through
//! [`MoveResult::Rejected`](crate::MoveResult::Rejected).

use crate::types::Phase;
use derive_more::{Display, Error, From};

/// A coordinate outside the fixed 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is outside the 3x3 grid", row, col)]
pub struct OutOfRangeError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// A move was submitted after the match reached a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Game is already over ({})", phase)]
pub struct GameOverError {
    /// The terminal phase the match ended in.
    pub phase: Phase,
}

/// Errors returned by [`GameEngine::apply_move`](crate::GameEngine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// Coordinate outside the grid.
    #[display("{}", _0)]
    OutOfRange(#[error(not(source))] OutOfRangeError),
    /// Match already finished.
    #[display("{}", _0)]
    GameOver(#[error(not(source))] GameOverError),
}
