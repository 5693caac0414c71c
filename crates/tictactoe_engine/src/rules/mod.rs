//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Terminal status is always recomputed
//! from the cells alone, so the result does not depend on move history.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, has_line};

use crate::board::Board;
use crate::types::Phase;
use tracing::instrument;

/// Computes the phase implied by the board's contents.
///
/// A completed line wins (see [`check_winner`] for the order players are
/// checked in); otherwise a full board is a draw; otherwise play continues.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> Phase {
    if let Some(winner) = check_winner(board) {
        Phase::won_by(winner)
    } else if is_full(board) {
        Phase::Draw
    } else {
        Phase::InProgress
    }
}
