//! Key/value slots for board snapshots
//!
//! A slot holds one serialized board under a fixed key. Writes are
//! synchronous so that a commit is durable before the caller renders the
//! next frame.

use crate::error::{Result, TaskboardError};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Durable key/value storage for board snapshots
pub trait BoardStorage: Send {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Check that a slot key names a file inside the storage directory.
///
/// Keys are file stems, so separators, `..` and empty keys are rejected.
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(TaskboardError::invalid_value("storage.key", "key cannot be empty"));
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(TaskboardError::invalid_value(
            "storage.key",
            format!("key '{key}' must not contain path separators or '..'"),
        ));
    }
    Ok(())
}

/// File-backed storage: one `<key>.json` file per slot in a directory.
///
/// Opening takes an exclusive lock on `<dir>/.lock` that is held until the
/// storage is dropped, so two stores never write the same directory.
pub struct FileStorage {
    /// Directory holding the slot files
    root: PathBuf,
    _lock: StorageLock,
}

impl FileStorage {
    /// Open (creating if needed) the storage directory and lock it
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let lock = StorageLock::acquire(&root.join(".lock"))?;
        debug!(path = %root.display(), "opened file storage");
        Ok(Self { root, _lock: lock })
    }

    /// Path to a slot's file
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl BoardStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        atomic_write(&self.slot_path(key)?, value.as_bytes())
    }
}

/// RAII lock guard - releases on drop
struct StorageLock {
    file: File,
}

impl StorageLock {
    /// Try to acquire an exclusive lock (non-blocking)
    fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file }),
            Err(_) => Err(TaskboardError::StorageBusy {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// In-process storage, for tests and embedders that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot already filled
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.into(), value.into());
        storage
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BoardStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write via temp file then rename (atomic on the same filesystem)
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
