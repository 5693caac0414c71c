//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Player;
use tracing::{debug, info, instrument, warn};

/// Presentation settings for a terminal match.
///
/// Every field has a default, so a partial (or missing) TOML file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct DriverConfig {
    /// Name announced for Player 1.
    #[serde(default = "default_player1_name")]
    #[setters(into)]
    player1_name: String,

    /// Name announced for Player 2.
    #[serde(default = "default_player2_name")]
    #[setters(into)]
    player2_name: String,

    /// Mark drawn for Player 1.
    #[serde(default = "default_player1_symbol")]
    player1_symbol: char,

    /// Mark drawn for Player 2.
    #[serde(default = "default_player2_symbol")]
    player2_symbol: char,

    /// Clear the terminal before each board redraw.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

#[instrument]
fn default_player1_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_player2_name() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_player1_symbol() -> char {
    'X'
}

#[instrument]
fn default_player2_symbol() -> char {
    'O'
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            player1_symbol: default_player1_symbol(),
            player2_symbol: default_player2_symbol(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or the symbols
    /// it sets do not pass [`DriverConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that both marks are visible and tell the players apart.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BlankSymbol`] for a whitespace symbol and
    /// [`ConfigError::DuplicateSymbol`] when both players share one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [Player::Player1, Player::Player2] {
            if self.symbol_of(player).is_whitespace() {
                warn!(%player, "Blank board symbol");
                return Err(ConfigError::BlankSymbol { player });
            }
        }
        if self.player1_symbol == self.player2_symbol {
            warn!(symbol = %self.player1_symbol, "Players share a board symbol");
            return Err(ConfigError::DuplicateSymbol {
                symbol: self.player1_symbol,
            });
        }
        Ok(())
    }

    /// Returns the display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1_name,
            Player::Player2 => &self.player2_name,
        }
    }

    /// Returns the board symbol for `player`.
    pub fn symbol_of(&self, player: Player) -> char {
        match player {
            Player::Player1 => self.player1_symbol,
            Player::Player2 => self.player2_symbol,
        }
    }
}

/// Reasons a driver configuration cannot be used.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[display("Cannot read config file {}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`DriverConfig`].
    #[display("Invalid settings in {}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Both players were given the same board symbol.
    #[display("Both players use the symbol '{}'", symbol)]
    DuplicateSymbol {
        /// The shared symbol.
        symbol: char,
    },

    /// A player's symbol would not show up on the board.
    #[display("{} has a blank board symbol", player)]
    BlankSymbol {
        /// Player with the blank symbol.
        player: Player,
    },
}
