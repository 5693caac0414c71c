//! Tic-tac-toe game-state engine.
//!
//! Pure game logic for a two-player match on a fixed 3x3 grid:
//!
//! - **Board**: cell storage with single-occupancy placement
//! - **GameEngine**: turn order, the place-then-evaluate cycle, terminal detection
//! - **Rules**: the eight winning lines and the draw check
//! - **Invariants**: checkable properties every reachable state satisfies
//!
//! The engine performs no I/O. A driver asks for the current player, obtains a
//! coordinate from somewhere, submits it with [`GameEngine::apply_move`] and
//! stops once [`GameEngine::phase`] is terminal.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveResult, Phase, Player};
//!
//! let mut game = GameEngine::new_game();
//! assert_eq!(game.current_player(), Player::Player1);
//!
//! let result = game.apply_move(1, 1).unwrap();
//! assert_eq!(result, MoveResult::Accepted(Phase::InProgress));
//! assert_eq!(game.current_player(), Player::Player2);
//!
//! // Occupied cells are rejected without changing the turn.
//! assert_eq!(game.apply_move(1, 1).unwrap(), MoveResult::Rejected);
//! assert_eq!(game.current_player(), Player::Player2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveResult};
pub use board::{Board, SIZE};
pub use error::{EngineError, GameOverError, OutOfRangeError};
pub use game::{GameEngine, GameState};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation,
};
pub use position::Position;
pub use rules::{LINES, Line, check_winner, evaluate, has_line, is_draw, is_full};
pub use types::{Cell, Phase, Player};
