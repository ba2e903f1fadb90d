//! # Local Store
//!
//! A key-value store over a directory of JSON documents: `<dir>/<key>.json`.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup:   read(key)  once per store ── missing file → Ok(None)        │
//! │                                       └─ bad content  → Err(Corrupted)  │
//! │                                                                         │
//! │  Mutation:  write(key, snapshot)  full overwrite, every time            │
//! │                                                                         │
//! │  Logout:    remove(key)  idempotent                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes go through a temp file followed by a rename so a crash mid-write
//! leaves the previous snapshot intact rather than a truncated document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

// =============================================================================
// Local Store
// =============================================================================

/// Handle to the snapshot directory.
///
/// Cloneable and cheap: each store object in the app holds its own handle.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) the snapshot directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        debug!(dir = %dir.display(), "local store opened");
        Ok(LocalStore { dir })
    }

    /// The directory snapshots live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and decodes the snapshot under `key`.
    ///
    /// ## Returns
    /// - `Ok(Some(value))` when a parseable snapshot exists
    /// - `Ok(None)` when the key has never been written (or was removed)
    /// - `Err(Corrupted)` when content exists but does not decode
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let path = self.path_for(key)?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, bytes = raw.len(), "snapshot read");
                Ok(Some(value))
            }
            Err(e) => Err(StorageError::corrupted(key, e.to_string())),
        }
    }

    /// Encodes `value` and overwrites the snapshot under `key`.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::corrupted(key, e.to_string()))?;

        // Write-then-rename keeps the previous snapshot if we die mid-write.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &raw).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;

        debug!(key, bytes = raw.len(), "snapshot written");
        Ok(())
    }

    /// Deletes the snapshot under `key`. Missing snapshots are fine.
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "snapshot removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Maps a key to its file path, rejecting anything that is not a plain
    /// lowercase identifier (keys are ours, not user input, but a typo must
    /// not escape the data directory).
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        items: Vec<String>,
        count: u32,
    }

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = LocalStore::open(dir.path()).expect("open");
        (dir, store)
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, store) = store();
        let snap = Snapshot {
            items: vec!["b1".to_string(), "b2".to_string()],
            count: 2,
        };

        store.write("cart", &snap).unwrap();
        let back: Option<Snapshot> = store.read("cart").unwrap();
        assert_eq!(back, Some(snap));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let (_dir, store) = store();
        let got: Option<Snapshot> = store.read("never-written").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_write_overwrites_previous_snapshot() {
        let (_dir, store) = store();
        store
            .write("cart", &Snapshot { items: vec![], count: 0 })
            .unwrap();
        store
            .write(
                "cart",
                &Snapshot {
                    items: vec!["b1".to_string()],
                    count: 1,
                },
            )
            .unwrap();

        let back: Snapshot = store.read("cart").unwrap().unwrap();
        assert_eq!(back.count, 1);
    }

    #[test]
    fn test_corrupted_content_is_a_typed_error() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("cart.json"), "{not json at all").unwrap();

        let got: StorageResult<Option<Snapshot>> = store.read("cart");
        assert!(matches!(got, Err(StorageError::Corrupted { .. })));
    }

    #[test]
    fn test_wrong_shape_is_corrupted_too() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("cart.json"), "[1, 2, 3]").unwrap();

        let got: StorageResult<Option<Snapshot>> = store.read("cart");
        assert!(matches!(got, Err(StorageError::Corrupted { .. })));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store
            .write("token", &"opaque".to_string())
            .unwrap();

        store.remove("token").unwrap();
        let got: Option<String> = store.read("token").unwrap();
        assert!(got.is_none());

        // second remove of a missing key succeeds
        store.remove("token").unwrap();
    }

    #[test]
    fn test_path_traversal_keys_are_rejected() {
        let (_dir, store) = store();
        for key in ["", "../escape", "a/b", "a.b"] {
            let got: StorageResult<Option<Snapshot>> = store.read(key);
            assert!(matches!(got, Err(StorageError::InvalidKey(_))), "key {:?}", key);
        }
    }

    #[test]
    fn test_plain_string_snapshot() {
        // the session token is stored as a bare JSON string
        let (_dir, store) = store();
        store.write("token", &"tok-123".to_string()).unwrap();
        let back: Option<String> = store.read("token").unwrap();
        assert_eq!(back.as_deref(), Some("tok-123"));
    }
}
