//! Knight move generation.
//!
//! A knight moves two squares along one axis and one square along the other.
//! From the middle of a large board that gives eight destinations; edges and
//! corners cut that down.
//!
//! Legality is one-ply: a destination is legal if it is on the board and not
//! yet visited. Whether the tour can still be completed from there is never
//! considered.

use smallvec::SmallVec;

use crate::core::{BoardSize, Square, VisitLog};

/// Knight offsets `(d_row, d_col)` in enumeration order.
///
/// Legal moves are always reported in this order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Legal destinations from one square. A knight never has more than eight.
pub type LegalMoves = SmallVec<[Square; 8]>;

/// All on-board knight destinations from `from`, visited or not.
pub fn knight_targets(size: BoardSize, from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| from.offset(dr, dc, size))
}

/// Compute legal knight moves from `from`.
///
/// A destination is legal iff it lies on the board and is not in `visited`.
///
/// ## Example
///
/// ```
/// use knights_tour::core::{BoardSize, Square, VisitLog};
/// use knights_tour::rules::compute_legal_moves;
///
/// let size = BoardSize::new(5).unwrap();
/// let mut visited = VisitLog::new();
/// visited.visit(Square::new(0, 0));
///
/// let moves = compute_legal_moves(size, Square::new(0, 0), &visited);
/// assert_eq!(moves.as_slice(), &[Square::new(2, 1), Square::new(1, 2)]);
/// ```
#[must_use]
pub fn compute_legal_moves(size: BoardSize, from: Square, visited: &VisitLog) -> LegalMoves {
    knight_targets(size, from)
        .filter(|&sq| !visited.contains(sq))
        .collect()
}

/// Check whether `to` is a knight's move away from `from`.
#[must_use]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let dr = (from.row() as i16 - to.row() as i16).abs();
    let dc = (from.col() as i16 - to.col() as i16).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_corner_of_5x5() {
        let moves = compute_legal_moves(size(5), Square::new(0, 0), &VisitLog::new());
        assert_eq!(moves.as_slice(), &[Square::new(2, 1), Square::new(1, 2)]);
    }

    #[test]
    fn test_center_of_3x3_has_no_moves() {
        let moves = compute_legal_moves(size(3), Square::new(1, 1), &VisitLog::new());
        assert!(moves.is_empty());
    }

    #[test]
    fn test_center_of_8x8_has_eight_moves_in_offset_order() {
        let from = Square::new(4, 4);
        let moves = compute_legal_moves(size(8), from, &VisitLog::new());

        let expected: Vec<_> = KNIGHT_OFFSETS
            .iter()
            .map(|&(dr, dc)| Square::new((4 + dr) as u8, (4 + dc) as u8))
            .collect();
        assert_eq!(moves.to_vec(), expected);
    }

    #[test]
    fn test_visited_squares_excluded() {
        let mut visited = VisitLog::new();
        visited.visit(Square::new(2, 1));

        let moves = compute_legal_moves(size(5), Square::new(0, 0), &visited);
        assert_eq!(moves.as_slice(), &[Square::new(1, 2)]);
    }

    #[test]
    fn test_1x1_and_2x2_boards() {
        assert!(compute_legal_moves(size(1), Square::new(0, 0), &VisitLog::new()).is_empty());
        for sq in Square::all(size(2)) {
            assert!(compute_legal_moves(size(2), sq, &VisitLog::new()).is_empty());
        }
    }

    #[test]
    fn test_every_target_is_a_knight_move() {
        let n = size(6);
        for from in Square::all(n) {
            for to in knight_targets(n, from) {
                assert!(is_knight_move(from, to));
                assert!(to.is_on_board(n));
            }
        }
    }

    #[test]
    fn test_is_knight_move() {
        assert!(is_knight_move(Square::new(0, 0), Square::new(1, 2)));
        assert!(is_knight_move(Square::new(3, 3), Square::new(1, 2)));
        assert!(!is_knight_move(Square::new(0, 0), Square::new(1, 1)));
        assert!(!is_knight_move(Square::new(0, 0), Square::new(0, 0)));
        assert!(!is_knight_move(Square::new(0, 0), Square::new(2, 2)));
    }
}
