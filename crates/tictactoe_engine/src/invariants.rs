//! Checkable properties of a [`GameState`].
//!
//! Every state reachable through [`GameEngine`](crate::GameEngine) satisfies
//! these. The engine re-checks them after each accepted move in debug builds.

use crate::game::GameState;
use crate::types::Player;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Players alternate starting with Player 1.
///
/// Player 1 has as many marks as Player 2 or exactly one more, and it is
/// Player 1's turn iff the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let first = state.board().count(Player::Player1);
        let second = state.board().count(Player::Player2);

        let expected_turn = if first == second {
            Some(Player::Player1)
        } else if first == second + 1 {
            Some(Player::Player2)
        } else {
            None
        };

        let valid = expected_turn == Some(state.current_player());
        if !valid {
            warn!(first, second, current = %state.current_player(), "Turn order violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players must alternate, starting with Player 1"
    }
}

/// Move history matches the board.
///
/// Each recorded move's cell holds that move's player and every occupied
/// cell has exactly one recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        let moves_on_board = history
            .iter()
            .all(|mv| board.cell(mv.position()).occupant() == Some(mv.player()));
        let valid = moves_on_board && history.len() == board.occupied();
        if !valid {
            warn!(
                history_len = history.len(),
                occupied = board.occupied(),
                "History inconsistent with board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Move history must match the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (AlternatingTurnInvariant, HistoryConsistentInvariant);
