// ABOUTME: Blob persistence for whole-state snapshots under fixed keys
// ABOUTME: BlobStore trait with a directory-backed JSON file implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Blob storage
//!
//! The application persists state as opaque JSON documents under fixed
//! keys, mirroring a key-value store. [`BlobStore`] is the seam; the
//! shipped implementation is [`FileStore`], one `<key>.json` file per key
//! inside a data directory. The calculation engine never touches this
//! module — load/save happens at caller-defined lifecycle points through
//! [`crate::state::AppState`].

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed blob keys for the application snapshot
pub mod keys {
    /// User profile blob
    pub const USER: &str = "user";
    /// Nutrition entry log blob
    pub const NUTRITION: &str = "nutrition";
    /// Body weight log blob
    pub const WEIGHT: &str = "weight";
    /// Workout log blob (templates + sessions)
    pub const WORKOUTS: &str = "workouts";
    /// Saved meals blob
    pub const SAVED_MEALS: &str = "saved_meals";
    /// Food catalog blob
    pub const FOODS: &str = "foods";
    /// Exercise catalog blob
    pub const EXERCISES: &str = "exercises";

    /// Every key that belongs to one snapshot
    pub const ALL: [&str; 7] = [
        USER, NUTRITION, WEIGHT, WORKOUTS, SAVED_MEALS, FOODS, EXERCISES,
    ];
}

/// Key-value blob persistence
pub trait BlobStore {
    /// Read the blob stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on filesystem failure. A missing blob is
    /// `Ok(None)`, not an error.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `blob` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on filesystem failure.
    fn put(&self, key: &str, blob: &str) -> AppResult<()>;

    /// Remove the blob under `key`; removing an absent key is a no-op
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on filesystem failure.
    fn delete(&self, key: &str) -> AppResult<()>;

    /// Remove every known snapshot blob ("hard reset")
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on filesystem failure.
    fn clear(&self) -> AppResult<()> {
        for key in keys::ALL {
            self.delete(key)?;
        }
        Ok(())
    }
}

/// Directory-backed blob store, one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened blob store");
        Ok(Self { root })
    }

    /// Open the store at the platform data directory (`<data_dir>/macrotrack`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if no platform data directory is available
    /// or it cannot be created.
    pub fn open_default() -> AppResult<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                "no platform data directory",
            ))
        })?;
        Self::open(base.join("macrotrack"))
    }

    /// Root directory of this store
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => {
                debug!(key, bytes = blob.len(), "read blob");
                Ok(Some(blob))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, blob: &str) -> AppResult<()> {
        // Write-then-rename so a crash mid-write never truncates the blob
        let final_path = self.path_for(key);
        let tmp_path = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp_path, blob)?;
        fs::rename(&tmp_path, &final_path)?;
        debug!(key, bytes = blob.len(), "wrote blob");
        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                warn!(key, "deleted blob");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(keys::USER).unwrap(), None);
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put(keys::NUTRITION, "[1,2,3]").unwrap();
        assert_eq!(store.get(keys::NUTRITION).unwrap().as_deref(), Some("[1,2,3]"));

        store.put(keys::NUTRITION, "[]").unwrap();
        assert_eq!(store.get(keys::NUTRITION).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put(keys::WEIGHT, "[]").unwrap();
        store.delete(keys::WEIGHT).unwrap();
        store.delete(keys::WEIGHT).unwrap();
        assert_eq!(store.get(keys::WEIGHT).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_all_known_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        for key in keys::ALL {
            store.put(key, "{}").unwrap();
        }
        store.clear().unwrap();
        for key in keys::ALL {
            assert_eq!(store.get(key).unwrap(), None, "key {key} should be gone");
        }
    }
}
