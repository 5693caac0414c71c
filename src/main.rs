//! Tictactoe - terminal CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG};
use std::path::{Path, PathBuf};
use tictactoe::{DriverConfig, RULES, play_match, run_menu};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or_else(|| Command::Menu {
        config: PathBuf::from(DEFAULT_CONFIG),
    });

    match command {
        Command::Menu { config } => run_main_menu(&config),
        Command::Play { config, json } => run_play(&config, json),
        Command::Rules => {
            print!("{}", RULES);
            Ok(())
        }
    }
}

/// Run the main menu on stdin/stdout
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn run_main_menu(config_path: &Path) -> Result<()> {
    let config = DriverConfig::load_or_default(config_path)?;
    let played = run_menu(&config, std::io::stdin().lock(), std::io::stdout().lock())?;
    info!(played, "Menu closed");
    Ok(())
}

/// Run one local match on stdin/stdout
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn run_play(config_path: &Path, json: bool) -> Result<()> {
    let config = DriverConfig::load_or_default(config_path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let state = play_match(&config, stdin.lock(), stdout.lock())?;
    info!(phase = %state.phase(), "Game complete");

    if json {
        let encoded =
            serde_json::to_string_pretty(&state).context("Failed to encode final state")?;
        println!("{}", encoded);
    }

    Ok(())
}
