//! Text rendering of the board and rules.

use crate::config::DriverConfig;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tictactoe_engine::Board;

/// Rule text shown by `tictactoe rules`.
pub const RULES: &str = "\
================= Rules =================
TicTacToe is a two-player game where the
objective is to get three of your pieces
in a row either horizontally, vertically
or diagonally. The game is played on a
3x3 grid. The first player to get three
pieces in a row wins the game. If the
grid is filled and no player has won,
the game is a draw.
=========================================
";

const SEPARATOR: &str = "   --- --- ---";

/// Clears the terminal and homes the cursor when `config` asks for it.
pub(crate) fn clear_screen<W: Write>(writer: &mut W, config: &DriverConfig) -> std::io::Result<()> {
    if *config.clear_screen() {
        execute!(writer, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

/// Renders the board with 1-based row and column labels.
pub fn render_board(board: &Board, config: &DriverConfig) -> String {
    let mut out = String::new();
    out.push_str("========== Tic Tac Toe =========\n");
    out.push_str(&format!(
        "{}: {}       {}: {}\n\n",
        config.player1_name(),
        config.player1_symbol(),
        config.player2_name(),
        config.player2_symbol(),
    ));
    out.push_str("    1   2   3\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    for (idx, row) in board.rows().iter().enumerate() {
        out.push_str(&format!("{} |", idx + 1));
        for cell in row {
            let symbol = cell
                .occupant()
                .map_or(' ', |player| config.symbol_of(player));
            out.push_str(&format!(" {} |", symbol));
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out.push_str("=============================\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Player;

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.place(0, 0, Player::Player1).unwrap();
        board.place(2, 1, Player::Player2).unwrap();

        let text = render_board(&board, &DriverConfig::default());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "Player 1: X       Player 2: O");
        assert_eq!(lines[5], "1 | X |   |   |");
        assert_eq!(lines[9], "3 |   | O |   |");
    }

    #[test]
    fn test_render_custom_symbols() {
        let mut board = Board::new();
        board.place(1, 1, Player::Player2).unwrap();
        let config = DriverConfig::default().with_player2_symbol('@');

        let text = render_board(&board, &config);
        assert!(text.contains("2 |   | @ |   |"));
    }
}
