//! Key-value stores backing user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::core::{Result, TourError};

/// String key-value storage for preferences.
pub trait PreferenceStore {
    /// Get a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Nothing outlives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`.
    ///
    /// A missing file starts empty. An unreadable file, or one that is not a
    /// JSON object, also starts empty (with a warning) and is overwritten on
    /// the next `set`. Within an object, numbers and booleans are kept in
    /// string form and any other value is skipped, so one bad entry never
    /// costs the others.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, Value>>(&text) {
                Ok(raw) => Self::string_values(&path, raw),
                Err(e) => {
                    warn!("ignoring malformed preferences in {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("cannot read preferences from {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn string_values(path: &Path, raw: BTreeMap<String, Value>) -> BTreeMap<String, String> {
        raw.into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                other => {
                    warn!("skipping preference {key:?} in {}: unexpected value {other}", path.display());
                    None
                }
            })
            .collect()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| TourError::Preferences(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TourError::Preferences(e.to_string()))?;
        }
        fs::write(&self.path, text).map_err(|e| TourError::Preferences(e.to_string()))?;
        debug!("wrote preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
