use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Durable storage key for the authenticated identity
pub const KEY_USER: &str = "user";

/// Durable storage key for the theme catalog
pub const KEY_THEMES: &str = "themes";

/// Durable storage key for the active theme
pub const KEY_DEFAULT_THEME: &str = "defaultTheme";

/// Durable storage key for the role's navigation links
pub const KEY_NAVLINKS: &str = "navlinks";

/// Durable storage key for the idle-period start marker
pub const KEY_RELOGIN_TIMESTAMP: &str = "reLoginTimestamp";

/// String-keyed JSON store, one file per key.
///
/// Writes are synchronous: a read issued right after a write observes
/// the new value. Cross-process coordination is not attempted; each
/// console instance treats the directory as its own.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a value by key. Missing, unreadable, and malformed records
    /// all yield `None`; this never errors.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(key, error = %e, "Failed to read stored value");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "Failed to parse stored value");
                None
            }
        }
    }

    /// Write a value under a key, replacing any previous record.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        std::fs::write(self.key_path(key), contents)
            .with_context(|| format!("Failed to write stored value: {}", key))?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stored value: {}", key))?;
        }
        Ok(())
    }

    /// Whether a record exists for the key (regardless of validity)
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        label: String,
        count: u32,
    }

    fn scratch_store() -> (LocalStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().to_path_buf()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let (store, _dir) = scratch_store();
        let record = Record {
            label: "hello".to_string(),
            count: 3,
        };
        store.write("record", &record).unwrap();
        assert_eq!(store.read::<Record>("record"), Some(record));
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let (store, _dir) = scratch_store();
        assert_eq!(store.read::<Record>("nope"), None);
        assert!(!store.contains("nope"));
    }

    #[test]
    fn test_corrupt_record_reads_as_none() {
        let (store, dir) = scratch_store();
        std::fs::write(dir.path().join("record.json"), "{not json").unwrap();
        assert!(store.contains("record"));
        assert_eq!(store.read::<Record>("record"), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _dir) = scratch_store();
        store.write("record", &Record { label: "x".to_string(), count: 1 }).unwrap();
        store.remove("record").unwrap();
        assert!(!store.contains("record"));
        // Second remove of an absent key still succeeds
        store.remove("record").unwrap();
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let (store, _dir) = scratch_store();
        store.write("record", &Record { label: "a".to_string(), count: 1 }).unwrap();
        store.write("record", &Record { label: "b".to_string(), count: 2 }).unwrap();
        let read: Record = store.read("record").unwrap();
        assert_eq!(read.label, "b");
        assert_eq!(read.count, 2);
    }
}
