use std::sync::Mutex;

use redis::Commands;
use tracing::{info, warn};

use super::{KvStore, StorageError};

/// Redis-backed storage using plain `GET`/`SET` on string keys.
///
/// One connection is opened on first use and reused; a command that fails
/// drops it so the next call reconnects.
pub struct RedisKvStore {
    client: redis::Client,
    prefix: String,
    conn: Mutex<Option<redis::Connection>>,
}

impl RedisKvStore {
    pub fn open(url: &str, prefix: impl Into<String>) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        let prefix = prefix.into();
        info!("Redis storage initialized (key prefix: {prefix:?})");
        Ok(Self {
            client,
            prefix,
            conn: Mutex::new(None),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn with_connection<T>(
        &self,
        op: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> Result<T, StorageError> {
        let mut slot = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut conn = match slot.take() {
            Some(conn) => conn,
            None => self.client.get_connection()?,
        };

        match op(&mut conn) {
            Ok(value) => {
                *slot = Some(conn);
                Ok(value)
            }
            Err(e) => {
                warn!("Redis command failed, dropping connection: {e}");
                Err(e.into())
            }
        }
    }

    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.conn.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

impl KvStore for RedisKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = self.full_key(key);
        self.with_connection(|conn| conn.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let key = self.full_key(key);
        self.with_connection(|conn| conn.set::<_, _, ()>(key, value))
    }
}
