//! Durable key-value slots backing knowledge base persistence.
//!
//! A [`StorageSlot`] is a localStorage-style surface: named string slots
//! that survive the session. The store treats write failures as non-fatal.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// The slot key the knowledge base is persisted under.
pub const KNOWLEDGE_SLOT_KEY: &str = "mindful_knowledge_base";

/// Errors from reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage slot unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error accessing slot: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize slot contents: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A named slot of durable string storage.
pub trait StorageSlot {
    /// Read the value stored under `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Can be switched into a failing mode to exercise the non-fatal
/// persistence-failure path.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slots: Mutex<HashMap<String, String>>,
    fail_writes: Mutex<bool>,
}

impl MemorySlot {
    /// Create an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a value under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        let mut slots = slot.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        drop(slots);
        slot
    }

    /// Make all subsequent writes fail (simulates quota exhaustion).
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(StorageError::Unavailable("write quota exceeded".into()));
        }
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    /// Create file-backed storage rooted at `root`. The directory is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
