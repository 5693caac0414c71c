//! Main menu: read the rules or play matches until the user exits.

use crate::config::DriverConfig;
use crate::render::{RULES, clear_screen};
use crate::session::play_match;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const MENU: &str = "\
=============== Main Menu ===============
Welcome to Tic Tac Toe!
1. View Rules
2. Play a local 2 player game
3. Exit
=========================================
";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show the rules.
    Rules,
    /// Start a fresh local match.
    Play,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Rules),
            "2" => Some(MenuChoice::Play),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the main menu until the user exits or input ends.
///
/// Every match starts from a new game. Returns the number of matches
/// played to completion.
///
/// # Errors
///
/// Fails on an invalid `config`, on I/O errors, or if input ends in the
/// middle of a match.
#[instrument(skip_all)]
pub fn run_menu<R: BufRead, W: Write>(
    config: &DriverConfig,
    mut reader: R,
    mut writer: W,
) -> Result<usize> {
    config.validate()?;
    let mut played = 0;

    loop {
        clear_screen(&mut writer, config)?;
        write!(writer, "{}", MENU)?;
        write!(writer, "Please choose an option to proceed: ")?;
        writer.flush()?;

        let Some(line) = read_line(&mut reader)? else {
            info!(played, "Input closed at the menu");
            return Ok(played);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Rules) => write!(writer, "{}", RULES)?,
            Some(MenuChoice::Play) => {
                let state = play_match(config, &mut reader, &mut writer)?;
                played += 1;
                info!(played, phase = %state.phase(), "Match finished");
            }
            Some(MenuChoice::Exit) => {
                writeln!(writer, "Exiting...")?;
                return Ok(played);
            }
            None => {
                debug!(input = line.trim(), "Unknown menu option");
                writeln!(writer, "Please enter a valid option")?;
                continue;
            }
        }

        if !wait_for_back(&mut reader, &mut writer)? {
            info!(played, "Input closed at the menu");
            return Ok(played);
        }
    }
}

/// Prompts until the user enters `b`. Returns false if input ends first.
fn wait_for_back<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool> {
    loop {
        write!(writer, "Enter b to back to the main menu: ")?;
        writer.flush()?;
        match read_line(reader)? {
            None => return Ok(false),
            Some(line) if line.trim() == "b" => return Ok(true),
            Some(_) => writeln!(writer, "Invalid input")?,
        }
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::Rules));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("rules"), None);
    }
}
