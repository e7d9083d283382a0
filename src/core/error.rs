//! Error types for tour operations.

use super::board::BoardSize;
use super::square::Square;

/// Errors reported by the engine and its collaborators.
///
/// Every engine rejection leaves the tour state unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Destination is not in the current legal-move set.
    #[error("invalid move to {to}")]
    InvalidMove { to: Square },

    /// The knight is already on the board; use `move_to` instead.
    #[error("knight already placed at {at}")]
    AlreadyPlaced { at: Square },

    /// Square lies outside the board.
    #[error("square {square} is outside the {size} board")]
    OutOfBounds { square: Square, size: BoardSize },

    /// Board size outside the supported range.
    #[error("invalid board size {0} (expected 1..={max})", max = super::board::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    /// Text could not be parsed as a square.
    #[error("cannot parse square from {0:?}")]
    ParseSquare(String),

    /// Text could not be parsed as a board size.
    #[error("cannot parse board size from {0:?}")]
    ParseBoardSize(String),

    /// Unrecognized front-end command.
    #[error("unrecognized command {0:?} (try `help`)")]
    UnknownCommand(String),

    /// Preference storage failed.
    #[error("preference store error: {0}")]
    Preferences(String),
}

/// Result type for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;
