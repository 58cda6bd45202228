use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use demohub_core::model::Item;

use super::{Backend, StoreError};

/// In-process backend. `None` models a collection that does not exist.
pub struct MemoryBackend {
    items: Mutex<Option<Vec<Item>>>,
}

impl MemoryBackend {
    /// Existing, empty collection.
    pub fn empty() -> Self {
        Self { items: Mutex::new(Some(Vec::new())) }
    }

    /// No collection at all, as if the backing file was never created.
    pub fn missing() -> Self {
        Self { items: Mutex::new(None) }
    }

    pub fn replace(&self, items: Vec<Item>) {
        *self.lock() = Some(items);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<Item>>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn init(&self) -> Result<bool, StoreError> {
        let mut guard = self.lock();
        if guard.is_some() {
            return Ok(false);
        }
        *guard = Some(Vec::new());
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<Item>, StoreError> {
        self.lock().clone().ok_or_else(|| {
            StoreError::Missing(io::Error::new(io::ErrorKind::NotFound, "collection does not exist"))
        })
    }

    async fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        *self.lock() = Some(items.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
