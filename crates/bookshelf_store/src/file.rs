//! File-based slot store for persistent storage.
//!
//! On-disk layout, one file per slot under the store root:
//!
//! ```text
//! <root>/
//! ├─ bookshelf_books    # slot "bookshelf_books"
//! ├─ wishlist           # slot "wishlist"
//! └─ .tmp-<key>         # transient staging file for atomic saves
//! ```
//!
//! The `.tmp-` prefix starts with a character no valid key may start
//! with, so staging files can never collide with slot files.

use crate::error::StoreResult;
use crate::slot::{validate_key, SlotStore};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A file-based slot store.
///
/// Data survives process restarts. Saves are crash-safe: the new blob is
/// written to a staging file, synced, and atomically renamed over the
/// slot file, so a crash mid-save leaves the previous contents intact.
///
/// # Example
///
/// ```no_run
/// use bookshelf_store::{FileSlotStore, SlotStore};
/// use std::path::Path;
///
/// let mut store = FileSlotStore::open(Path::new("bookshelf_data")).unwrap();
/// store.save("books", b"[]").unwrap();
/// ```
#[derive(Debug)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    /// Opens a slot store rooted at the given directory, creating the
    /// directory (and parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the path
    /// exists but is not a directory.
    pub fn open(root: &Path) -> StoreResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path backing a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    pub fn slot_path(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn staging_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".tmp-{key}"))
    }

    /// Syncs the root directory so renames and deletions are durable.
    ///
    /// On Windows, directory fsync is not supported; NTFS journaling
    /// covers metadata durability there.
    #[cfg(unix)]
    fn sync_root(&self) -> StoreResult<()> {
        let dir = File::open(&self.root)?;
        dir.sync_all()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_root(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl SlotStore for FileSlotStore {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let path = self.slot_path(key)?;
        let staging = self.staging_path(key);

        // Write-then-rename: the slot file is only ever replaced whole.
        let mut file = File::create(&staging)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staging, &path)?;
        self.sync_root()?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                self.sync_root()?;
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.slot_path(key)?.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use tempfile::tempdir;

    #[test]
    fn file_open_creates_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");

        let store = FileSlotStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root);
    }

    #[test]
    fn file_save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("books", b"hello slots").unwrap();
        assert_eq!(store.load("books").unwrap(), Some(b"hello slots".to_vec()));
        assert!(store.contains("books").unwrap());
    }

    #[test]
    fn file_load_missing_slot() {
        let dir = tempdir().unwrap();
        let store = FileSlotStore::open(dir.path()).unwrap();

        assert_eq!(store.load("books").unwrap(), None);
        assert!(!store.contains("books").unwrap());
    }

    #[test]
    fn file_save_overwrites_whole_slot() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("books", b"a much longer first payload").unwrap();
        store.save("books", b"short").unwrap();

        assert_eq!(store.load("books").unwrap(), Some(b"short".to_vec()));
    }

    #[test]
    fn file_persistence_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = FileSlotStore::open(dir.path()).unwrap();
            store.save("books", b"persistent data").unwrap();
        }

        {
            let store = FileSlotStore::open(dir.path()).unwrap();
            assert_eq!(
                store.load("books").unwrap(),
                Some(b"persistent data".to_vec())
            );
        }
    }

    #[test]
    fn file_remove_reports_presence() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("books", b"data").unwrap();
        assert!(store.remove("books").unwrap());
        assert!(!store.remove("books").unwrap());
        assert_eq!(store.load("books").unwrap(), None);
    }

    #[test]
    fn file_no_staging_file_left_behind() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("books", b"data").unwrap();
        assert!(!store.staging_path("books").exists());
    }

    #[test]
    fn file_rejects_invalid_key() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        let result = store.save("../outside", b"x");
        assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
        assert!(!dir.path().parent().unwrap().join("outside").exists());
    }

    #[test]
    fn file_empty_blob_roundtrips() {
        let dir = tempdir().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("books", b"").unwrap();
        assert_eq!(store.load("books").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn file_slot_path_is_under_root() {
        let dir = tempdir().unwrap();
        let store = FileSlotStore::open(dir.path()).unwrap();

        let path = store.slot_path("books").unwrap();
        assert_eq!(path, dir.path().join("books"));
    }
}
