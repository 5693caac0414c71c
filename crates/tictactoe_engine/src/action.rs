//! Move records and move outcomes.

use crate::position::Position;
use crate::types::{Phase, Player};
use serde::{Deserialize, Serialize};

/// An accepted placement: a player's mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Outcome of [`GameEngine::apply_move`](crate::GameEngine::apply_move).
///
/// A rejected move is routine input noise, not an error: the same player
/// is expected to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed; carries the phase after the move.
    Accepted(Phase),
    /// The cell was already occupied; nothing changed.
    Rejected,
}

impl MoveResult {
    /// Returns true if the move was placed.
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Returns the phase after an accepted move.
    pub fn phase(self) -> Option<Phase> {
        match self {
            MoveResult::Accepted(phase) => Some(phase),
            MoveResult::Rejected => None,
        }
    }
}
