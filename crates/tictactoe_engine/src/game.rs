//! Game state and the move-applying engine.

use crate::action::{Move, MoveResult};
use crate::board::Board;
use crate::error::{EngineError, GameOverError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Phase, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one match.
///
/// Starts with an empty board, Player 1 to move and the phase in progress.
/// Once the phase is terminal it never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    history: Vec<Move>,
}

impl GameState {
    /// Creates the state of a fresh match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the cached phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}

/// Tic-tac-toe game engine.
///
/// Owns a [`GameState`] and serializes moves against it. Each engine is an
/// independent match; callers must not share one across threads without
/// their own synchronization.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Starts a new match.
    #[instrument]
    pub fn new_game() -> Self {
        debug!("New game");
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the engine, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns the phase computed after the last accepted move.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.state.history.last().copied()
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// On success the turn passes to the other player and the phase is
    /// re-evaluated. An occupied cell yields [`MoveResult::Rejected`] and
    /// leaves everything, including the turn, unchanged.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the phase is already terminal.
    /// - [`EngineError::OutOfRange`] if either coordinate is outside 0-2.
    ///
    /// Neither error mutates the state.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, EngineError> {
        let phase = self.state.phase;
        if phase.is_terminal() {
            warn!(%phase, "Move submitted after the game ended");
            return Err(GameOverError { phase }.into());
        }

        let pos = Position::new(row, col)?;
        let player = self.state.current_player;
        if !self.state.board.place_at(pos, player) {
            debug!(%pos, "Move rejected");
            return Ok(MoveResult::Rejected);
        }

        let mv = Move::new(player, pos);
        self.state.history.push(mv);
        self.state.current_player = player.opponent();
        self.state.phase = self.evaluate();

        debug_assert!(
            EngineInvariants::check_all(&self.state).is_ok(),
            "Engine invariants violated after {}",
            mv
        );

        let phase = self.state.phase;
        if phase.is_terminal() {
            info!(%phase, moves = self.state.history.len(), "Game finished");
        }
        Ok(MoveResult::Accepted(phase))
    }

    /// Recomputes the phase from the board without modifying anything.
    pub fn evaluate(&self) -> Phase {
        rules::evaluate(&self.state.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutOfRangeError;
    use crate::types::Cell;

    fn play(game: &mut GameEngine, moves: &[(usize, usize)]) -> Phase {
        let mut phase = game.phase();
        for &(row, col) in moves {
            let result = game.apply_move(row, col).unwrap();
            assert!(result.is_accepted(), "move ({}, {}) rejected", row, col);
            phase = result.phase().unwrap();
        }
        phase
    }

    #[test]
    fn test_new_game() {
        let game = GameEngine::new_game();
        assert_eq!(game.current_player(), Player::Player1);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut game = GameEngine::new_game();
        assert_eq!(game.apply_move(0, 0), Ok(MoveResult::Accepted(Phase::InProgress)));
        assert_eq!(game.current_player(), Player::Player2);
        assert_eq!(game.board().get(0, 0), Ok(Cell::Player1));
        assert_eq!(
            game.last_move(),
            Some(Move::new(Player::Player1, Position::new(0, 0).unwrap()))
        );
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = GameEngine::new_game();
        play(&mut game, &[(1, 1)]);
        for _ in 0..3 {
            assert_eq!(game.apply_move(1, 1), Ok(MoveResult::Rejected));
            assert_eq!(game.current_player(), Player::Player2);
        }
        assert_eq!(game.board().get(1, 1), Ok(Cell::Player1));
        assert_eq!(game.state().history().len(), 1);
    }

    #[test]
    fn test_out_of_range_keeps_turn() {
        let mut game = GameEngine::new_game();
        let before = game.state().clone();
        assert_eq!(
            game.apply_move(0, 3),
            Err(EngineError::OutOfRange(OutOfRangeError { row: 0, col: 3 }))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let mut game = GameEngine::new_game();
        let phase = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(phase, Phase::Player1Won);

        let before = game.state().clone();
        for (row, col) in [(2, 2), (1, 2), (0, 0), (9, 9)] {
            assert_eq!(
                game.apply_move(row, col),
                Err(EngineError::GameOver(GameOverError {
                    phase: Phase::Player1Won
                }))
            );
        }
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_evaluate_matches_cached_phase() {
        let mut game = GameEngine::new_game();
        play(&mut game, &[(2, 0), (0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(game.phase(), Phase::Player2Won);
        assert_eq!(game.evaluate(), game.phase());
        assert_eq!(game.evaluate(), game.evaluate());
    }

    #[test]
    fn test_state_with_off_grid_move_is_not_loaded() {
        let mut game = GameEngine::new_game();
        play(&mut game, &[(0, 0)]);

        let json = serde_json::to_string(game.state()).unwrap();
        assert!(json.contains(r#""position":[0,0]"#));
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), *game.state());

        let corrupted = json.replace(r#""position":[0,0]"#, r#""position":[7,0]"#);
        assert!(serde_json::from_str::<GameState>(&corrupted).is_err());
    }

    #[test]
    fn test_independent_games() {
        let mut first = GameEngine::new_game();
        let second = GameEngine::new_game();
        play(&mut first, &[(1, 1)]);
        assert_eq!(second.board(), &Board::new());
        assert_eq!(second.current_player(), Player::Player1);
    }
}
