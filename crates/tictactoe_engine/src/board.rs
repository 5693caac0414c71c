//! The 3x3 grid of cells.

use crate::error::OutOfRangeError;
use crate::position::Position;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Cells only ever move from [`Cell::Empty`] to occupied; nothing clears them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is outside 0-2.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OutOfRangeError> {
        let pos = Position::new(row, col)?;
        Ok(self.cell(pos))
    }

    /// Returns the cell at an already validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Places `player`'s mark at (`row`, `col`) if the cell is empty.
    ///
    /// Returns `Ok(true)` when the mark was placed and `Ok(false)` when the
    /// cell was already occupied, in which case the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is outside 0-2.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<bool, OutOfRangeError> {
        let pos = Position::new(row, col)?;
        Ok(self.place_at(pos, player))
    }

    /// Places `player`'s mark at an already validated position.
    pub fn place_at(&mut self, pos: Position, player: Player) -> bool {
        let cell = &mut self.cells[pos.row()][pos.col()];
        if !cell.is_empty() {
            debug!(%pos, occupant = ?cell.occupant(), "Cell already occupied");
            return false;
        }
        *cell = player.cell();
        debug!(%pos, %player, "Mark placed");
        true
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect()
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.occupant() == Some(player))
            .count()
    }

    /// Counts the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.get(1, 1), Ok(Cell::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        assert_eq!(board.place(0, 2, Player::Player1), Ok(true));
        assert_eq!(board.get(0, 2), Ok(Cell::Player1));
        assert_eq!(board.count(Player::Player1), 1);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        assert_eq!(board.place(1, 1, Player::Player2), Ok(true));
        let before = board.clone();

        assert_eq!(board.place(1, 1, Player::Player1), Ok(false));
        assert_eq!(board.place(1, 1, Player::Player2), Ok(false));
        assert_eq!(board, before);
        assert_eq!(board.get(1, 1), Ok(Cell::Player2));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut board = Board::new();
        assert_eq!(board.get(3, 0), Err(OutOfRangeError { row: 3, col: 0 }));
        assert_eq!(board.get(0, 3), Err(OutOfRangeError { row: 0, col: 3 }));
        assert_eq!(
            board.place(5, 5, Player::Player1),
            Err(OutOfRangeError { row: 5, col: 5 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            assert!(!board.is_full());
            board.place_at(pos, Player::Player1);
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 9);
        assert!(board.empty_positions().is_empty());
    }
}
