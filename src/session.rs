//! Interactive local match: the loop that drives the engine.

use crate::config::{ConfigError, DriverConfig};
use crate::input::read_coordinate;
use crate::render::{clear_screen, render_board};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameState, MoveResult, Phase};
use tracing::{debug, info, instrument};

/// A local two-player match read from `reader` and drawn to `writer`.
pub struct Session<'a, R, W> {
    config: &'a DriverConfig,
    reader: R,
    writer: W,
    game: GameEngine,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session around a fresh game.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`DriverConfig::validate`].
    pub fn new(config: &'a DriverConfig, reader: R, writer: W) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            reader,
            writer,
            game: GameEngine::new_game(),
        })
    }

    /// Plays until the game reaches a terminal phase.
    ///
    /// Returns the final state of the match.
    ///
    /// # Errors
    ///
    /// Fails if input runs out before the game ends or on I/O errors.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameState> {
        info!("Starting local match");
        loop {
            self.redraw()?;
            let phase = self.take_turn()?;
            if phase.is_terminal() {
                self.redraw()?;
                self.announce(phase)?;
                info!(%phase, "Match over");
                return Ok(self.game.into_state());
            }
        }
    }

    /// Prompts the current player until one move is accepted.
    fn take_turn(&mut self) -> Result<Phase> {
        let player = self.game.current_player();
        let name = self.config.name_of(player).to_string();
        loop {
            let row = read_coordinate(
                &mut self.reader,
                &mut self.writer,
                &format!("{}, please enter the row you would like to place your piece into: ", name),
            )?;
            let col = read_coordinate(
                &mut self.reader,
                &mut self.writer,
                &format!("{}, please enter the column you would like to place your piece into: ", name),
            )?;

            let result = self
                .game
                .apply_move(row, col)
                .context("Engine refused the move")?;
            match result {
                MoveResult::Accepted(phase) => return Ok(phase),
                MoveResult::Rejected => {
                    debug!(row, col, "Cell occupied, prompting again");
                    writeln!(self.writer, "The box is full, please try again.")?;
                }
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        clear_screen(&mut self.writer, self.config)?;
        write!(self.writer, "{}", render_board(self.game.board(), self.config))?;
        if let Some(last) = self.game.last_move() {
            writeln!(
                self.writer,
                "{} placed a piece at {} x {}",
                self.config.name_of(last.player()),
                last.position().row() + 1,
                last.position().col() + 1,
            )?;
        }
        Ok(())
    }

    fn announce(&mut self, phase: Phase) -> Result<()> {
        match phase.winner() {
            Some(winner) => writeln!(
                self.writer,
                "Congratulations! The winner is {}",
                self.config.name_of(winner)
            )?,
            None => writeln!(self.writer, "It is a draw......")?,
        }
        Ok(())
    }
}

/// Plays one local match with the given configuration.
pub fn play_match<R: BufRead, W: Write>(
    config: &DriverConfig,
    reader: R,
    writer: W,
) -> Result<GameState> {
    Session::new(config, reader, writer)?.run()
}
