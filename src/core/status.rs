//! Tour status: a classification derived from engine state, never stored.
//!
//! ## TourStatus
//!
//! - `Empty`: no knight on the board
//! - `InProgress`: knight placed, moves remain, squares remain
//! - `Won`: every square visited
//! - `Stuck`: knight placed, squares remain, no legal move
//!
//! ## StatusReport
//!
//! Status plus the counts a front end shows next to it.

use serde::{Deserialize, Serialize};

/// Derived classification of a tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourStatus {
    /// Knight not yet placed.
    Empty,
    /// Tour underway with at least one legal move.
    InProgress,
    /// Every square visited exactly once.
    Won,
    /// No legal move and unvisited squares remain.
    Stuck,
}

impl TourStatus {
    /// Classify a tour from its observable counts.
    ///
    /// `placed` says whether the knight is on the board.
    #[must_use]
    pub fn classify(placed: bool, visited: usize, total: usize, legal_moves: usize) -> Self {
        if !placed {
            TourStatus::Empty
        } else if visited == total {
            TourStatus::Won
        } else if legal_moves == 0 {
            TourStatus::Stuck
        } else {
            TourStatus::InProgress
        }
    }

    /// Check if the tour has ended (won or stuck).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TourStatus::Won | TourStatus::Stuck)
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TourStatus::Empty => "empty",
            TourStatus::InProgress => "in progress",
            TourStatus::Won => "won",
            TourStatus::Stuck => "stuck",
        };
        f.write_str(name)
    }
}

/// Status with visited/total counts and the number of legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: TourStatus,
    pub visited: usize,
    pub total: usize,
    pub legal_moves: usize,
}

impl StatusReport {
    /// Title and body for the end-of-tour overlay.
    ///
    /// Returns `None` unless the tour is won or stuck.
    #[must_use]
    pub fn overlay(&self) -> Option<(&'static str, String)> {
        match self.status {
            TourStatus::Won => Some(("Full Tour!", format!("You visited all {} squares.", self.total))),
            TourStatus::Stuck => Some((
                "No Moves Left",
                format!("Stuck at {}/{}. Undo or start a new tour.", self.visited, self.total),
            )),
            TourStatus::Empty | TourStatus::InProgress => None,
        }
    }
}

/// The one-line status message.
impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (v, t) = (self.visited, self.total);
        match self.status {
            TourStatus::Empty => write!(f, "Place the knight anywhere to begin."),
            TourStatus::Won => write!(f, "Tour complete! {v}/{t} squares visited."),
            TourStatus::Stuck => write!(f, "No moves available. Stuck at {v}/{t}."),
            TourStatus::InProgress => {
                let k = self.legal_moves;
                let plural = if k == 1 { "" } else { "s" };
                write!(f, "Visited {v}/{t}. {k} move{plural} available.")
            }
        }
    }
}
