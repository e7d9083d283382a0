//! The tour engine: placement, moves, undo and reset.
//!
//! ## State
//!
//! - Board size (fixed for a tour)
//! - Visit log (history, visited set, move index)
//! - Next-moves cache
//!
//! The current square is the last entry of the visit log, so it can never
//! disagree with the history. The next-moves cache is recomputed after every
//! successful mutation and is always exactly
//! `compute_legal_moves(size, current, visited)`.
//!
//! ## Usage
//!
//! ```
//! use knights_tour::core::{BoardSize, Square, TourEngine, TourStatus};
//!
//! let mut engine = TourEngine::new(BoardSize::new(5).unwrap());
//! engine.place(Square::new(0, 0)).unwrap();
//! engine.move_to(Square::new(2, 1)).unwrap();
//! assert_eq!(engine.status(), TourStatus::InProgress);
//!
//! // Rejected moves leave the tour untouched.
//! assert!(engine.move_to(Square::new(0, 0)).is_err());
//! assert_eq!(engine.visited_count(), 2);
//!
//! engine.undo();
//! assert_eq!(engine.current(), Some(Square::new(0, 0)));
//! ```

use im::Vector;
use log::debug;

use super::board::BoardSize;
use super::error::{Result, TourError};
use super::square::Square;
use super::status::{StatusReport, TourStatus};
use super::visits::VisitLog;
use crate::rules::{compute_legal_moves, LegalMoves};

/// A single Knight's Tour in progress.
///
/// Cloning is cheap: the history is a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourEngine {
    size: BoardSize,
    visits: VisitLog,
    next_moves: LegalMoves,
}

impl TourEngine {
    /// Create an empty tour on a board of the given size.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            visits: VisitLog::new(),
            next_moves: LegalMoves::new(),
        }
    }

    // === Queries ===

    /// Board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Square the knight occupies, or `None` before placement.
    #[must_use]
    pub fn current(&self) -> Option<Square> {
        self.visits.last()
    }

    /// Visited squares in visitation order.
    #[must_use]
    pub fn history(&self) -> &Vector<Square> {
        self.visits.history()
    }

    /// The visit log (history, visited set and move index).
    #[must_use]
    pub fn visits(&self) -> &VisitLog {
        &self.visits
    }

    /// Number of visited squares.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visits.len()
    }

    /// Number of squares on the board.
    #[must_use]
    pub fn total_squares(&self) -> usize {
        self.size.total_squares()
    }

    /// Check if a square has been visited in this tour.
    #[must_use]
    pub fn is_visited(&self, square: Square) -> bool {
        self.visits.contains(square)
    }

    /// 1-based visitation order of a square, if visited.
    #[must_use]
    pub fn move_number(&self, square: Square) -> Option<u32> {
        self.visits.move_number(square)
    }

    /// Legal destinations from the current square, in knight-offset order.
    ///
    /// Empty before placement.
    #[must_use]
    pub fn legal_moves(&self) -> &[Square] {
        &self.next_moves
    }

    /// Check if `square` is a legal destination for the next move.
    #[must_use]
    pub fn is_legal_move(&self, square: Square) -> bool {
        self.next_moves.contains(&square)
    }

    /// Derived tour status.
    #[must_use]
    pub fn status(&self) -> TourStatus {
        TourStatus::classify(
            self.current().is_some(),
            self.visited_count(),
            self.total_squares(),
            self.next_moves.len(),
        )
    }

    /// Status together with visited/total/legal-move counts.
    #[must_use]
    pub fn report(&self) -> StatusReport {
        StatusReport {
            status: self.status(),
            visited: self.visited_count(),
            total: self.total_squares(),
            legal_moves: self.next_moves.len(),
        }
    }

    // === Mutations ===

    /// Place the knight to start the tour.
    ///
    /// Fails with `AlreadyPlaced` once a tour is underway and with
    /// `OutOfBounds` for squares off the board. State is unchanged on error.
    pub fn place(&mut self, square: Square) -> Result<TourStatus> {
        if let Some(at) = self.current() {
            return Err(TourError::AlreadyPlaced { at });
        }
        if !square.is_on_board(self.size) {
            return Err(TourError::OutOfBounds { square, size: self.size });
        }

        self.advance(square)?;
        debug!("placed knight at {} on {} board", square, self.size);
        Ok(self.status())
    }

    /// Move the knight to `square`.
    ///
    /// The square must be one of [`legal_moves`](Self::legal_moves); anything
    /// else (no knight placed, revisits, non-knight jumps, off-board squares)
    /// is rejected with `InvalidMove` and the state is unchanged.
    pub fn move_to(&mut self, square: Square) -> Result<TourStatus> {
        if !self.is_legal_move(square) {
            debug!("rejected move to {}", square);
            return Err(TourError::InvalidMove { to: square });
        }

        let number = self.advance(square)?;
        debug!("move {} to {}", number, square);
        Ok(self.status())
    }

    /// Place the knight if the board is empty, otherwise move it.
    pub fn play(&mut self, square: Square) -> Result<TourStatus> {
        if self.current().is_none() {
            self.place(square)
        } else {
            self.move_to(square)
        }
    }

    /// Take back the most recent placement or move.
    ///
    /// Returns the square that was vacated, or `None` if there was nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<Square> {
        let square = self.visits.unvisit()?;
        self.refresh_next_moves();
        debug!("undid visit to {} ({} remaining)", square, self.visits.len());
        Some(square)
    }

    /// Discard the tour, optionally switching to a new board size.
    ///
    /// The whole state is replaced at once; squares from a previous size must
    /// not be reused after a size change.
    pub fn reset(&mut self, new_size: Option<BoardSize>) {
        let size = new_size.unwrap_or(self.size);
        debug!("reset tour on {} board", size);
        *self = Self::new(size);
    }

    /// Visit `square` and refresh the cache. Callers check legality first,
    /// so a revisit here is a bookkeeping bug.
    fn advance(&mut self, square: Square) -> Result<u32> {
        debug_assert!(!self.visits.contains(square), "{square} visited twice");
        let number = self
            .visits
            .visit(square)
            .ok_or(TourError::InvalidMove { to: square })?;
        self.refresh_next_moves();
        Ok(number)
    }

    fn refresh_next_moves(&mut self) {
        self.next_moves = match self.current() {
            Some(from) => compute_legal_moves(self.size, from, &self.visits),
            None => LegalMoves::new(),
        };
    }
}

impl Default for TourEngine {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
