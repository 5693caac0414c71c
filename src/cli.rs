//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "tictactoe.toml";

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Local two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (the main menu if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the main menu: view rules or play matches until exit
    Menu {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Play a local two-player game
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Print the final game state as JSON when the game ends
        #[arg(long)]
        json: bool,
    },

    /// Print the rules
    Rules,
}
