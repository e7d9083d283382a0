//! # knights-tour
//!
//! An interactive Knight's Tour puzzle: place a knight on an n×n board and
//! move it with legal knight jumps, trying to visit every square exactly once.
//!
//! ## Design Principles
//!
//! 1. **Engine First**: `TourEngine` owns all tour state and knows nothing
//!    about rendering. Front ends call it, then re-render.
//!
//! 2. **Rejections Change Nothing**: an invalid placement or move returns an
//!    error and leaves the state exactly as it was.
//!
//! 3. **Derived Status**: won/stuck/in-progress is always recomputed from the
//!    state, never stored alongside it.
//!
//! ## Modules
//!
//! - `core`: squares, board size, visit log, status, errors, `TourEngine`
//! - `rules`: knight offsets and legal-move generation
//! - `prefs`: the two persisted preferences (board size, visited style)
//! - `render`: plain-text board rendering
//! - `session`: line-oriented interactive session driving the engine
//! - `python`: Python bindings (feature `python`)

pub mod core;
pub mod prefs;
pub mod render;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, Square, StatusReport, TourEngine, TourError, TourStatus, VisitLog,
    MAX_BOARD_SIZE,
};

pub use crate::rules::{compute_legal_moves, LegalMoves, KNIGHT_OFFSETS};

pub use crate::prefs::{JsonFileStore, MemoryStore, PreferenceStore, Preferences, VisitedStyle};

pub use crate::render::{Glyphs, TextRenderer};

pub use crate::session::{Command, Reply, Session};
