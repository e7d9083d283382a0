//! Board size.

use serde::{Deserialize, Serialize};

use super::error::{Result, TourError};

/// Largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 32;

/// Board edge length `n` for an `n x n` board.
///
/// Always in `1..=MAX_BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(u8);

impl BoardSize {
    /// The standard chessboard.
    pub const STANDARD: Self = Self(8);

    /// The largest supported board.
    pub const MAX: Self = Self(MAX_BOARD_SIZE as u8);

    /// Create a board size, validating the range.
    pub fn new(n: usize) -> Result<Self> {
        if (1..=MAX_BOARD_SIZE).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(TourError::InvalidBoardSize(n))
        }
    }

    /// Edge length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of squares on the board (`n * n`).
    #[must_use]
    pub const fn total_squares(self) -> usize {
        self.get() * self.get()
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = TourError;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.get()
    }
}

impl std::str::FromStr for BoardSize {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        let n = s
            .trim()
            .parse::<usize>()
            .map_err(|_| TourError::ParseBoardSize(s.to_string()))?;
        Self::new(n)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
