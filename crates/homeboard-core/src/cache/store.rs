//! Key-value storage backing the expiring cache.
//!
//! Entries are opaque text. `FileStore` keeps one JSON file per key so
//! cached feeds survive restarts; `MemoryStore` lives only as long as the
//! process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

pub trait KeyValueStore: Send + Sync {
    fn set(&self, name: &str, value: &str) -> Result<()>;
    fn get(&self, name: &str) -> Result<Option<String>>;
    fn remove(&self, name: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, name: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        Ok(entries.get(name).cloned())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        entries.remove(name);
        Ok(())
    }
}

pub struct FileStore {
    cache_dir: PathBuf,
}

impl FileStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    /// Map a key to its file. Bytes outside `[A-Za-z0-9-]` become `_xx`
    /// (lowercase hex), so distinct keys never share a file and no key can
    /// leave the directory.
    fn cache_path(&self, name: &str) -> PathBuf {
        let mut safe = String::with_capacity(name.len());
        for byte in name.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                safe.push(char::from(byte));
            } else {
                safe.push_str(&format!("_{:02x}", byte));
            }
        }
        self.cache_dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn set(&self, name: &str, value: &str) -> Result<()> {
        let path = self.cache_path(name);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write cache file: {}", name))?;
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        let path = self.cache_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", name))?;
        Ok(Some(contents))
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.cache_path(name);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove cache file: {}", name))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("weather", "{}").unwrap();
        assert_eq!(store.get("weather").unwrap().as_deref(), Some("{}"));
        assert_eq!(store.len(), 1);

        store.remove("weather").unwrap();
        assert_eq!(store.get("weather").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cache")).unwrap();

        assert_eq!(store.get("news").unwrap(), None);
        store.set("news", "[1,2,3]").unwrap();
        assert_eq!(store.get("news").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("cache").join("news.json").exists());

        store.remove("news").unwrap();
        assert_eq!(store.get("news").unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path().to_path_buf())
            .unwrap()
            .set("currency", "109.5")
            .unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("currency").unwrap().as_deref(), Some("109.5"));
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cache")).unwrap();

        store.set("../escape", "x").unwrap();
        assert!(!dir.path().join("escape.json").exists());
        assert!(dir.path().join("cache").join("_2e_2e_2fescape.json").exists());
        assert_eq!(store.get("../escape").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_keeps_similar_keys_apart() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("a.b", "1").unwrap();
        assert_eq!(store.get("a_b").unwrap(), None);
        assert_eq!(store.get("a/b").unwrap(), None);

        store.set("a_b", "2").unwrap();
        store.set("a/b", "3").unwrap();
        assert_eq!(store.get("a.b").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("a_b").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("a/b").unwrap().as_deref(), Some("3"));

        store.remove("a_b").unwrap();
        assert_eq!(store.get("a.b").unwrap().as_deref(), Some("1"));
    }
}
