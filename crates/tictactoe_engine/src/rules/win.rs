//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Three positions that win when one player holds all of them.
pub type Line = [Position; 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = {
    let [tl, tc, tr, ml, c, mr, bl, bc, br] = Position::ALL;
    [
        // Rows
        [tl, tc, tr],
        [ml, c, mr],
        [bl, bc, br],
        // Columns
        [tl, ml, bl],
        [tc, c, bc],
        [tr, mr, br],
        // Diagonals
        [tl, c, br],
        [tr, c, bl],
    ]
};

/// Checks whether `player` holds every cell of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        let owned = line
            .iter()
            .all(|pos| board.cell(*pos).occupant() == Some(player));
        if owned {
            trace!(%player, ?line, "Line completed");
        }
        owned
    })
}

/// Checks if there is a winner on the board.
///
/// Players are checked in enumeration order and the first one holding a
/// line is returned. A board where both players hold a line cannot arise
/// from alternating play; if one is constructed directly, Player 1 is
/// reported.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_line(board, *player))
}
