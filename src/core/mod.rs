//! Core engine types: squares, board size, visit log, status, errors and the
//! tour engine itself.
//!
//! Nothing in this module knows about rendering or input; front ends drive
//! a `TourEngine` and re-render after each call.

pub mod board;
pub mod engine;
pub mod error;
pub mod square;
pub mod status;
pub mod visits;

pub use board::{BoardSize, MAX_BOARD_SIZE};
pub use engine::TourEngine;
pub use error::{Result, TourError};
pub use square::Square;
pub use status::{StatusReport, TourStatus};
pub use visits::VisitLog;
