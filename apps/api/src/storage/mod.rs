// Key-value persistence substrate.
// Values are JSON strings; the core only ever needs whole-value get and set.

pub mod file_store;
pub mod memory_store;
pub mod redis_store;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub use file_store::FileKvStore;
pub use memory_store::MemoryKvStore;
pub use redis_store::RedisKvStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous string key-value store.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and decodes the value under `key`.
/// Missing keys, read failures and undecodable values all come back as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read '{key}' from storage, using defaults: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding malformed value under '{key}': {e}");
            None
        }
    }
}

/// Encodes `value` and writes it under `key` as one complete snapshot.
pub fn save_json<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded).map_err(|e| {
        error!("Failed to persist '{key}': {e}");
        e
    })
}
