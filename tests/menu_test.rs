//! Tests for the main menu loop.

use tictactoe::{DriverConfig, run_menu};

const TOP_ROW_WIN: &str = "1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n";

fn menu(input: &str) -> (anyhow::Result<usize>, String) {
    let config = DriverConfig::default().with_clear_screen(false);
    let mut out = Vec::new();
    let result = run_menu(&config, input.as_bytes(), &mut out);
    (result, String::from_utf8(out).expect("UTF-8 output"))
}

#[test]
fn test_rules_then_exit() {
    let (result, out) = menu("1\nb\n3\n");
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains("================= Rules ================="));
    assert!(out.contains("Exiting..."));
    assert_eq!(out.matches("Welcome to Tic Tac Toe!").count(), 2);
}

#[test]
fn test_play_again_starts_fresh_game() {
    let input = format!("2\n{TOP_ROW_WIN}b\n2\n{TOP_ROW_WIN}b\n3\n");
    let (result, out) = menu(&input);
    assert_eq!(result.unwrap(), 2);
    assert_eq!(out.matches("Congratulations! The winner is Player 1").count(), 2);
}

#[test]
fn test_invalid_option_and_back_prompt() {
    let (result, out) = menu("9\n1\nx\nb\n3\n");
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains("Please enter a valid option"));
    assert_eq!(out.matches("Invalid input\n").count(), 1);
}

#[test]
fn test_input_closed_at_menu() {
    let (result, _) = menu("");
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_input_closed_mid_match() {
    let (result, _) = menu("2\n1\n1\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_refused() {
    let config = DriverConfig::default()
        .with_clear_screen(false)
        .with_player1_symbol(' ');
    let mut out = Vec::new();
    assert!(run_menu(&config, "3\n".as_bytes(), &mut out).is_err());
    assert!(out.is_empty());
}
