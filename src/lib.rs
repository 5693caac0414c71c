//! Local two-player tic-tac-toe for the terminal.
//!
//! The game rules live in [`tictactoe_engine`]; this crate is the driver
//! around them: configuration, rendering, line-based input, the match loop
//! and the main menu.
//!
//! # Example
//!
//! ```
//! use tictactoe::{DriverConfig, Phase, play_match};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = DriverConfig::default().with_clear_screen(false);
//! // Player 1 takes the top row.
//! let input = "1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n";
//! let state = play_match(&config, input.as_bytes(), Vec::new())?;
//! assert_eq!(state.phase(), Phase::Player1Won);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod menu;
mod render;
mod session;

pub use config::{ConfigError, DriverConfig};
pub use input::{parse_coordinate, read_coordinate};
pub use menu::{MenuChoice, run_menu};
pub use render::{RULES, render_board};
pub use session::{Session, play_match};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Board, Cell, EngineError, GameEngine, GameOverError, GameState, Move, MoveResult,
    OutOfRangeError, Phase, Player, Position,
};
