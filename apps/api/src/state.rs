use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::errors::AppError;
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// One lock around the document and all editors, so every request's
    /// read-modify-write sees the latest snapshot.
    pub workspace: Arc<Mutex<Workspace>>,
    pub config: Config,
}

impl AppState {
    pub fn new(workspace: Workspace, config: Config) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            config,
        }
    }

    /// Runs `f` under the workspace lock on the blocking pool.
    ///
    /// Every mutation writes through the key-value store, whose file and
    /// Redis backends do synchronous I/O, so it must stay off the async workers.
    pub async fn with_workspace<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Workspace) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let mut guard = self.workspace.clone().lock_owned().await;
        tokio::task::spawn_blocking(move || f(&mut guard))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed for workspace call: {e}"))
            })?
    }
}
