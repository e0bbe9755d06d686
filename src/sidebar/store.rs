//! Persistence for UI preferences.
//!
//! Values are stored as the literal strings `"true"` / `"false"` under a
//! string key, the same shape browser local storage uses.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashError, Result};

/// Key holding the sidebar collapsed preference.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Boolean key-value persistence injected into UI state.
pub trait PreferenceStore {
    /// Read a boolean. `None` when the key was never written.
    ///
    /// Only the literal `"true"` reads as `true`.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get_bool(&self, key: &str) -> Result<Option<bool>>;

    /// Write a boolean through to the backing storage.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

const fn encode(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}

fn decode(raw: &str) -> bool {
    raw == TRUE
}

/// In-process store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one raw entry already present.
    #[must_use]
    pub fn with_entry(key: &str, raw: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), raw.to_string());
        store
    }

    /// Raw stored string for a key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.raw(key).map(decode))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.entries.insert(key.to_string(), encode(value).to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk; every write is flushed immediately.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Load from file, or start empty if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            tracing::debug!(?path, "Loading preference store");
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| DashError::StateCorrupt {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            tracing::debug!(?path, "Preference store not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Start empty at `path`, ignoring whatever the file holds.
    #[must_use]
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = ?self.path, "Preference store saved");
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.entries.get(key).map(|raw| decode(raw)))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.entries.insert(key.to_string(), encode(value).to_string());
        self.flush()
    }
}
