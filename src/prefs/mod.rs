//! Persisted user preferences.
//!
//! Two values survive across sessions, each under a fixed key:
//! - `kt_size`: board size for new tours
//! - `kt_style`: how visited squares are drawn (`icon` or `number`)

pub mod preferences;
pub mod store;

pub use preferences::{Preferences, VisitedStyle, SIZE_KEY, STYLE_KEY};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
