//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Enumeration order is significant: [`Player::Player1`] moves first and is
/// checked first when evaluating the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first).
    #[default]
    #[display("Player 1")]
    Player1,
    /// Second player.
    #[display("Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Returns the cell value this player's mark occupies.
    pub fn cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

/// Contents of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Occupied by [`Player::Player1`].
    Player1,
    /// Occupied by [`Player::Player2`].
    Player2,
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// Overall match status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Moves are still being accepted.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Player 1 completed a line.
    #[display("Player 1 won")]
    Player1Won,
    /// Player 2 completed a line.
    #[display("Player 2 won")]
    Player2Won,
    /// Board filled with no completed line.
    #[display("Draw")]
    Draw,
}

impl Phase {
    /// Returns the winning phase for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Player1 => Phase::Player1Won,
            Player::Player2 => Phase::Player2Won,
        }
    }

    /// Returns true once no further moves may be applied.
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Player1Won => Some(Player::Player1),
            Phase::Player2Won => Some(Player::Player2),
            Phase::InProgress | Phase::Draw => None,
        }
    }
}
