use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Where the document and drafts are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File { data_dir: PathBuf },
    Redis { url: String, key_prefix: String },
}

impl StorageBackend {
    pub fn label(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File { .. } => "file",
            StorageBackend::Redis { .. } => "redis",
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage: StorageBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = var("STORAGE_BACKEND").unwrap_or_else(|| "file".to_string());
        let storage = match backend.as_str() {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File {
                data_dir: var("DATA_DIR")
                    .unwrap_or_else(|| "./data".to_string())
                    .into(),
            },
            "redis" => StorageBackend::Redis {
                url: var("REDIS_URL").context(
                    "Required environment variable 'REDIS_URL' is not set (STORAGE_BACKEND=redis)",
                )?,
                key_prefix: var("REDIS_KEY_PREFIX").unwrap_or_default(),
            },
            other => bail!("STORAGE_BACKEND must be one of memory, file, redis (got '{other}')"),
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            storage,
        })
    }
}
