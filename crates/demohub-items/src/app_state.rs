//! Shared application state for the item store.

use std::sync::Arc;

use demohub_core::error::Result;

use crate::config::ItemsConfig;
use crate::store::{Backend, ItemStore, JsonFileBackend};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ItemsConfig,
    store: ItemStore,
}

impl AppState {
    /// State backed by the configured JSON file.
    pub fn new(cfg: ItemsConfig) -> Self {
        let backend = Arc::new(JsonFileBackend::new(cfg.storage.data_file.clone()));
        Self::with_backend(cfg, backend)
    }

    pub fn with_backend(cfg: ItemsConfig, backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: ItemStore::new(backend),
            }),
        }
    }

    /// Create the backing collection if absent. Call once before serving.
    pub async fn init_storage(&self) -> Result<()> {
        self.inner.store.init().await
    }

    pub fn cfg(&self) -> &ItemsConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &ItemStore {
        &self.inner.store
    }
}
