mod config;
mod document;
mod editor;
mod errors;
mod ids;
mod models;
mod routes;
mod state;
mod storage;
mod workspace;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::ids::UuidIds;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FileKvStore, KvStore, MemoryKvStore, RedisKvStore};
use crate::workspace::Workspace;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid or missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Builder v{}", env!("CARGO_PKG_VERSION"));

    let kv = build_kv_store(&config.storage)?;
    info!("Storage backend: {}", config.storage.label());

    let workspace = Workspace::open(kv, Arc::new(UuidIds));
    let state = AppState::new(workspace, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the editor UI is served from another origin in development

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the key-value store selected by configuration.
fn build_kv_store(backend: &StorageBackend) -> Result<Arc<dyn KvStore>> {
    let store: Arc<dyn KvStore> = match backend {
        StorageBackend::Memory => Arc::new(MemoryKvStore::new()),
        StorageBackend::File { data_dir } => {
            info!("Persisting to {}", data_dir.display());
            Arc::new(FileKvStore::new(data_dir))
        }
        StorageBackend::Redis { url, key_prefix } => {
            Arc::new(RedisKvStore::open(url, key_prefix.clone())?)
        }
    };
    Ok(store)
}
