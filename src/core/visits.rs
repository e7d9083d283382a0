//! Visit log: history, visited set and move index kept in lockstep.
//!
//! The three views of "where has the knight been" share one owner:
//!
//! - **history**: squares in visitation order
//! - **visited set**: membership, answered by the move index keys
//! - **move index**: square key -> 1-based visitation order
//!
//! Only [`VisitLog::visit`] and [`VisitLog::unvisit`] mutate the log, so
//! `history.len() == move_index.len()` and
//! `move_index[history[i].key()] == i + 1` hold after every call.

use im::Vector;
use rustc_hash::FxHashMap;

use super::square::Square;

/// Ordered record of visited squares.
///
/// History uses `im::Vector` so cloning a whole tour is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitLog {
    history: Vector<Square>,
    move_index: FxHashMap<u16, u32>,
}

impl VisitLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `square`.
    ///
    /// Returns the 1-based move number assigned, or `None` if the square was
    /// already visited (the log is left untouched).
    pub fn visit(&mut self, square: Square) -> Option<u32> {
        if self.contains(square) {
            return None;
        }
        self.history.push_back(square);
        let number = self.history.len() as u32;
        self.move_index.insert(square.key(), number);
        Some(number)
    }

    /// Remove the most recent visit.
    ///
    /// Returns the removed square, or `None` if the log is empty.
    pub fn unvisit(&mut self) -> Option<Square> {
        let square = self.history.pop_back()?;
        self.move_index.remove(&square.key());
        Some(square)
    }

    /// Squares in visitation order.
    #[must_use]
    pub fn history(&self) -> &Vector<Square> {
        &self.history
    }

    /// Most recently visited square.
    #[must_use]
    pub fn last(&self) -> Option<Square> {
        self.history.back().copied()
    }

    /// Number of visited squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Check if a square has been visited.
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        self.move_index.contains_key(&square.key())
    }

    /// 1-based visitation order of a square, if visited.
    #[must_use]
    pub fn move_number(&self, square: Square) -> Option<u32> {
        self.move_index.get(&square.key()).copied()
    }

    /// Iterate over `(square, move number)` pairs in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, u32)> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, &sq)| (sq, i as u32 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lockstep(log: &VisitLog) {
        assert_eq!(log.history.len(), log.move_index.len());
        for (i, sq) in log.history.iter().enumerate() {
            assert_eq!(log.move_index[&sq.key()], i as u32 + 1);
        }
    }

    #[test]
    fn test_visit_assigns_sequential_numbers() {
        let mut log = VisitLog::new();

        assert_eq!(log.visit(Square::new(0, 0)), Some(1));
        assert_eq!(log.visit(Square::new(2, 1)), Some(2));
        assert_eq!(log.visit(Square::new(4, 2)), Some(3));

        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(Square::new(4, 2)));
        assert_eq!(log.move_number(Square::new(2, 1)), Some(2));
        assert_lockstep(&log);
    }

    #[test]
    fn test_revisit_rejected() {
        let mut log = VisitLog::new();
        log.visit(Square::new(1, 1));

        assert_eq!(log.visit(Square::new(1, 1)), None);
        assert_eq!(log.len(), 1);
        assert_lockstep(&log);
    }

    #[test]
    fn test_unvisit() {
        let mut log = VisitLog::new();
        log.visit(Square::new(0, 0));
        log.visit(Square::new(1, 2));

        assert_eq!(log.unvisit(), Some(Square::new(1, 2)));
        assert!(!log.contains(Square::new(1, 2)));
        assert_eq!(log.move_number(Square::new(1, 2)), None);
        assert_lockstep(&log);

        assert_eq!(log.unvisit(), Some(Square::new(0, 0)));
        assert!(log.is_empty());
        assert_eq!(log.unvisit(), None);
        assert_lockstep(&log);
    }

    #[test]
    fn test_transposed_squares_indexed_separately() {
        let mut log = VisitLog::new();
        log.visit(Square::new(0, 1));
        log.visit(Square::new(1, 0));
        log.visit(Square::new(31, 0));

        assert_eq!(log.move_number(Square::new(0, 1)), Some(1));
        assert_eq!(log.move_number(Square::new(1, 0)), Some(2));
        assert_eq!(log.move_number(Square::new(0, 31)), None);
        assert_lockstep(&log);
    }

    #[test]
    fn test_iter_in_order() {
        let mut log = VisitLog::new();
        log.visit(Square::new(0, 0));
        log.visit(Square::new(2, 1));

        let pairs: Vec<_> = log.iter().collect();
        assert_eq!(pairs, vec![(Square::new(0, 0), 1), (Square::new(2, 1), 2)]);
    }
}
