//! Key-value slot storage.

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Relay errors.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Store(String),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// String key-value storage, standing in for the host page's persisted
/// storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> RelayResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RelayResult<()>;
    fn remove(&self, key: &str) -> RelayResult<()>;
}

/// In-memory store for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> RelayResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RelayError::Store(format!("lock error: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RelayResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RelayError::Store(format!("lock error: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RelayResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RelayError::Store(format!("lock error: {e}")))?;
        entries.remove(key);
        Ok(())
    }
}
