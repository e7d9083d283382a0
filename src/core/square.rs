//! Board squares.
//!
//! A square is addressed by `(row, col)` with row 0 at the top of the board.
//! Squares carry no board size; bounds are checked against a `BoardSize`
//! wherever a square enters the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::board::BoardSize;
use super::error::TourError;

/// A square on the board, addressed by `(row, col)`.
///
/// ## Example
///
/// ```
/// use knights_tour::core::Square;
///
/// let sq = Square::new(2, 1);
/// assert_eq!(sq.row(), 2);
/// assert_eq!(sq.col(), 1);
/// assert_eq!(sq.to_string(), "(2,1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Unique key for set/map membership; the visit log indexes by it.
    ///
    /// Distinct `(row, col)` pairs never share a key, independent of board size.
    #[must_use]
    pub const fn key(self) -> u16 {
        ((self.row as u16) << 8) | self.col as u16
    }

    /// Row-major index on a board of the given size.
    #[must_use]
    pub fn index(self, size: BoardSize) -> usize {
        self.row as usize * size.get() + self.col as usize
    }

    /// Check whether this square lies on a board of the given size.
    #[must_use]
    pub fn is_on_board(self, size: BoardSize) -> bool {
        (self.row as usize) < size.get() && (self.col as usize) < size.get()
    }

    /// Offset this square by `(dr, dc)`, staying on the board.
    ///
    /// Returns `None` if the destination falls outside `[0, size)`.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8, size: BoardSize) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let n = size.get() as i16;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over every square of a board in row-major order.
    pub fn all(size: BoardSize) -> impl Iterator<Item = Square> {
        let n = size.get() as u8;
        (0..n).flat_map(move |row| (0..n).map(move |col| Square::new(row, col)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// Parses `"r,c"`, `"r c"` or `"(r,c)"`.
impl FromStr for Square {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());

        let parse = |part: Option<&str>| {
            part.and_then(|p| p.parse::<u8>().ok())
                .ok_or_else(|| TourError::ParseSquare(s.to_string()))
        };

        let row = parse(parts.next())?;
        let col = parse(parts.next())?;
        if parts.next().is_some() {
            return Err(TourError::ParseSquare(s.to_string()));
        }
        Ok(Self::new(row, col))
    }
}
