//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the board as a 1-indexed (row, column) pair.
///
/// Row 1 is White's back rank and column 1 is the a-file. A `Position` is
/// always on the board: every constructor rejects coordinates outside 1..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position, returning `None` when either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Position { row, column })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are in 1..=8.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, column: u8) -> Self {
        Position { row, column }
    }

    /// Row (rank) in 1..=8.
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column (file) in 1..=8, where 1 is the a-file.
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Zero-based (row, column) pair for indexing the board grid.
    #[inline]
    pub(crate) const fn grid_index(self) -> (usize, usize) {
        ((self.row - 1) as usize, (self.column - 1) as usize)
    }

    /// Flat index 0..64 (a1 = 0, b1 = 1, ..., h8 = 63).
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.column as usize - 1)
    }

    /// Inverse of [`Position::as_index`].
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Position::new_unchecked((idx / 8) as u8 + 1, (idx % 8) as u8 + 1))
        } else {
            None
        }
    }

    /// The square `rows` ahead and `columns` across, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, rows: i8, columns: i8) -> Option<Self> {
        let row = self.row as i8 + rows;
        let column = self.column as i8 + columns;
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Position::new_unchecked(row as u8, column as u8))
        } else {
            None
        }
    }

    /// All 64 squares, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Position::new_unchecked(row, column)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column - 1) as char, self.row)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(PositionError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&column) {
            return Err(PositionError::ColumnOutOfBounds { column });
        }
        Ok(Position::new_unchecked(row, column))
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.column)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(PositionError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let column = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => {
                return Err(PositionError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => {
                return Err(PositionError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Position::new_unchecked(row, column))
    }
}
