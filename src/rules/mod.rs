//! Movement rules.
//!
//! The engine asks this module which squares the knight may reach next.
//! Rules are pure functions of board size, current square and visit log.

pub mod knight;

pub use knight::{compute_legal_moves, is_knight_move, knight_targets, LegalMoves, KNIGHT_OFFSETS};
