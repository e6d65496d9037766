//! Persistent single-slot blob cache.
//!
//! Stores the most recently encoded WAV container under one fixed key
//! inside one fixed store directory. There is no expiry and at most one
//! entry: each save overwrites the previous container. Saves go through
//! a temp-file-then-rename sequence so a crash mid-write never leaves a
//! truncated entry behind, and loads collapse every read problem to a
//! cache miss.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NoiseError, Result};

/// Name of the store directory under the cache root.
pub const STORE_NAME: &str = "audios";

/// Fixed key for the single cached container.
pub const BLOB_KEY: &str = "generated-noise.wav";

/// Store schema version, written once on first open.
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the schema marker file inside the store directory.
const SCHEMA_FILE: &str = "version";

/// Single-slot persistent blob store.
#[derive(Debug)]
pub struct BlobCache {
    store_dir: PathBuf,
}

impl BlobCache {
    /// Opens the store under `root`, initializing it lazily.
    ///
    /// The store directory and its schema marker are created on first
    /// open. Fails with a `STORAGE_OPEN` error when the directory cannot
    /// be created or the marker cannot be written.
    pub fn open(root: &Path) -> Result<Self> {
        let store_dir = root.join(STORE_NAME);
        fs::create_dir_all(&store_dir).map_err(|e| {
            NoiseError::storage_open(
                format!("cannot create store directory {}", store_dir.display()),
                e,
            )
        })?;

        let schema_path = store_dir.join(SCHEMA_FILE);
        if !schema_path.exists() {
            fs::write(&schema_path, SCHEMA_VERSION.to_string()).map_err(|e| {
                NoiseError::storage_open(
                    format!("cannot write schema marker {}", schema_path.display()),
                    e,
                )
            })?;
        }

        Ok(Self { store_dir })
    }

    /// Path of the single cache entry.
    pub fn entry_path(&self) -> PathBuf {
        self.store_dir.join(BLOB_KEY)
    }

    /// Persists the container, overwriting any previous entry.
    ///
    /// The bytes are written to a temp file in the store directory and
    /// renamed into place, so the entry is either the old container or
    /// the complete new one.
    pub fn save(&self, container: &[u8]) -> Result<()> {
        let tmp_path = self.store_dir.join(format!("{}.tmp", BLOB_KEY));

        let write_result = fs::File::create(&tmp_path)
            .and_then(|mut f| f.write_all(container).and(f.sync_all()));
        if let Err(e) = write_result {
            // Don't leave a stale temp file behind.
            let _ = fs::remove_file(&tmp_path);
            return Err(NoiseError::storage_write(
                format!("cannot write {}", tmp_path.display()),
                e,
            ));
        }

        fs::rename(&tmp_path, self.entry_path()).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            NoiseError::storage_write(
                format!("cannot commit entry {}", self.entry_path().display()),
                e,
            )
        })
    }

    /// Loads the cached container, or `None` when no usable entry exists.
    ///
    /// A missing entry, an unreadable entry, or an entry that is not a
    /// regular file all resolve to `None`. Foreign or corrupt data
    /// degrades to a cache miss rather than an error; the caller falls
    /// back to regeneration.
    pub fn load(&self) -> Option<Vec<u8>> {
        let path = self.entry_path();
        let metadata = fs::metadata(&path).ok()?;
        if !metadata.is_file() {
            return None;
        }
        fs::read(&path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_initializes_store_lazily() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();

        let store_dir = dir.path().join(STORE_NAME);
        assert!(store_dir.is_dir());
        let schema = fs::read_to_string(store_dir.join(SCHEMA_FILE)).unwrap();
        assert_eq!(schema, SCHEMA_VERSION.to_string());
        assert!(cache.load().is_none());
    }

    #[test]
    fn open_is_idempotent() {
        let dir = tempdir().unwrap();
        BlobCache::open(dir.path()).unwrap();
        BlobCache::open(dir.path()).unwrap();
    }

    #[test]
    fn save_then_load_round_trips_bytes() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();

        let container = vec![0x52u8, 0x49, 0x46, 0x46, 1, 2, 3, 4];
        cache.save(&container).unwrap();

        assert_eq!(cache.load(), Some(container));
    }

    #[test]
    fn load_on_fresh_store_is_absent_not_error() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();
        assert!(cache.load().is_none());
    }

    #[test]
    fn save_overwrites_previous_entry() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();

        cache.save(b"first").unwrap();
        cache.save(b"second").unwrap();

        assert_eq!(cache.load(), Some(b"second".to_vec()));
    }

    #[test]
    fn non_file_entry_degrades_to_miss() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();

        // A directory squatting on the entry key is foreign data.
        fs::create_dir(cache.entry_path()).unwrap();
        assert!(cache.load().is_none());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let cache = BlobCache::open(dir.path()).unwrap();
        cache.save(b"payload").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path().join(STORE_NAME))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn open_fails_when_root_is_unusable() {
        let dir = tempdir().unwrap();
        // A file where the store directory should go.
        let root = dir.path().join("occupied");
        fs::write(&root, b"not a directory").unwrap();

        let err = BlobCache::open(&root).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageOpen);
    }
}
