use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use uuid::Uuid;

use super::{KvStore, StorageError};

/// Stores each key as `<key>.json` inside a base directory.
pub struct FileKvStore {
    base_path: PathBuf,
}

impl FileKvStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

/// Rejects keys that could escape the base directory.
fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") || key.contains('\0') {
        return Err(StorageError::InvalidKey(format!(
            "key contains invalid characters: {key:?}"
        )));
    }
    if key.chars().any(|c| c.is_control()) {
        return Err(StorageError::InvalidKey(format!(
            "key contains control characters: {key:?}"
        )));
    }
    Ok(())
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        // Write to a sibling temp file and rename so readers never see a partial value.
        let tmp_path = self
            .base_path
            .join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));

        let write_result = (|| {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            drop(file);
            fs::rename(&tmp_path, &path)
        })();

        if let Err(e) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
