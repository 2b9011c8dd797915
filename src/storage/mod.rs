//! Key-value persistence seam
//!
//! The game persists two independent keys through this interface: the
//! cumulative statistics blob and the theme preference. `FileStore` keeps
//! one JSON file per key under a data directory; `MemoryStore` backs tests.

use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Key under which the statistics blob is stored
pub const STATS_KEY: &str = "stats";

/// Key under which the theme preference is stored
pub const THEME_KEY: &str = "theme";

/// Error type for store writes
#[derive(Debug)]
pub struct StoreError {
    source: io::Error,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write to store: {}", self.source)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<io::Error> for StoreError {
    fn from(source: io::Error) -> Self {
        Self { source }
    }
}

/// Minimal key-value interface for persistence
pub trait KvStore {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`
    ///
    /// # Errors
    /// Returns `StoreError` when the underlying medium rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one `<key>.json` file per key under a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("stats"), None);

        store.set("stats", "{\"a\":1}").unwrap();
        assert_eq!(store.get("stats").as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn memory_store_keys_independent() {
        let mut store = MemoryStore::new();
        store.set(STATS_KEY, "s").unwrap();
        store.set(THEME_KEY, "t").unwrap();

        assert_eq!(store.get(STATS_KEY).as_deref(), Some("s"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("t"));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = env::temp_dir().join(format!("lemot-store-test-{}", std::process::id()));
        let mut store = FileStore::new(&dir);

        assert_eq!(store.get("stats"), None);
        store.set("stats", "payload").unwrap();
        assert_eq!(store.get("stats").as_deref(), Some("payload"));

        fs::remove_dir_all(&dir).ok();
    }
}
