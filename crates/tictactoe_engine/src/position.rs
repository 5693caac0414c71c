//! Validated grid coordinates.

use crate::board::SIZE;
use crate::error::OutOfRangeError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A 0-based (row, column) coordinate known to lie on the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, failing if either coordinate is off the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRangeError> {
        if row >= SIZE || col >= SIZE {
            warn!(row, col, "Coordinate outside the grid");
            return Err(OutOfRangeError { row, col });
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = OutOfRangeError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_grid_coordinates() {
        let pos = Position::new(2, 1).unwrap();
        assert_eq!((pos.row(), pos.col()), (2, 1));
        assert_eq!(pos.index(), 7);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Position::new(3, 0), Err(OutOfRangeError { row: 3, col: 0 }));
        assert_eq!(Position::new(0, 7), Err(OutOfRangeError { row: 0, col: 7 }));
    }

    #[test]
    fn test_serializes_as_pair() {
        let pos = Position::new(1, 2).unwrap();
        assert_eq!(serde_json::to_string(&pos).unwrap(), "[1,2]");
        assert_eq!(serde_json::from_str::<Position>("[1,2]").unwrap(), pos);
    }

    #[test]
    fn test_deserialize_rejects_off_grid() {
        let err = serde_json::from_str::<Position>("[7,0]").unwrap_err();
        assert!(err.to_string().contains("outside the 3x3 grid"));
        assert!(serde_json::from_str::<Position>("[0,3]").is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        for (idx, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), idx);
        }
    }
}
