//! User preferences: board size and visited-square display style.
//!
//! These are the only values that survive across sessions. Tour progress is
//! never persisted.

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::PreferenceStore;
use crate::core::{BoardSize, Result, TourError};

/// Store key for the board size.
pub const SIZE_KEY: &str = "kt_size";

/// Store key for the visited-square style.
pub const STYLE_KEY: &str = "kt_style";

/// How visited squares are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitedStyle {
    /// A knight glyph fills each visited square.
    #[default]
    Icon,
    /// Each visited square shows its move number.
    Number,
}

impl VisitedStyle {
    /// Stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VisitedStyle::Icon => "icon",
            VisitedStyle::Number => "number",
        }
    }
}

impl std::fmt::Display for VisitedStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VisitedStyle {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icon" => Ok(VisitedStyle::Icon),
            "number" => Ok(VisitedStyle::Number),
            other => Err(TourError::Preferences(format!("unknown visited style {other:?}"))),
        }
    }
}

/// Persisted user preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Board size used for new tours.
    pub board_size: BoardSize,

    /// Display style for visited squares.
    pub visited_style: VisitedStyle,
}

impl Preferences {
    /// Create preferences with defaults (8x8, icon style).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: BoardSize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the visited style.
    #[must_use]
    pub fn with_visited_style(mut self, style: VisitedStyle) -> Self {
        self.visited_style = style;
        self
    }

    /// Load preferences from a store.
    ///
    /// Missing keys fall back to defaults silently; malformed values fall back
    /// with a warning.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();

        let board_size = match store.get(SIZE_KEY) {
            Some(raw) => raw.parse::<BoardSize>().unwrap_or_else(|e| {
                warn!("ignoring stored {SIZE_KEY}={raw:?}: {e}");
                defaults.board_size
            }),
            None => defaults.board_size,
        };

        let visited_style = match store.get(STYLE_KEY) {
            Some(raw) => raw.parse::<VisitedStyle>().unwrap_or_else(|e| {
                warn!("ignoring stored {STYLE_KEY}={raw:?}: {e}");
                defaults.visited_style
            }),
            None => defaults.visited_style,
        };

        Self { board_size, visited_style }
    }

    /// Write both preferences to a store.
    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        self.save_board_size(store)?;
        self.save_visited_style(store)
    }

    /// Write only the board size.
    pub fn save_board_size(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(SIZE_KEY, &self.board_size.get().to_string())
    }

    /// Write only the visited style.
    pub fn save_visited_style(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(STYLE_KEY, self.visited_style.as_str())
    }
}
