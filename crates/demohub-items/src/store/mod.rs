//! Item store: whole-collection read-modify-write over a pluggable backend.
//!
//! A backend only knows how to load and save the full collection. The
//! record semantics live in [`ItemStore`]:
//! - ids are `count_before + 1` (not stable across deletions)
//! - delete removes every record carrying the id and succeeds on no match
//! - a missing collection lists as empty but fails every other operation
//!
//! Mutations are serialised by an in-process async mutex. Nothing guards
//! against a second process writing the same file.

pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use demohub_core::error::{DemoError, Result};
use demohub_core::model::{now_iso8601, Item, NewItem};

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

/// Message carried by [`DemoError::NotFound`] for an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "Data not found";

/// Backend failure. Display is the raw underlying message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection does not exist yet (or was removed).
    #[error("{0}")]
    Missing(std::io::Error),
    #[error("{0}")]
    Io(std::io::Error),
    #[error("{0}")]
    Malformed(serde_json::Error),
}

impl From<StoreError> for DemoError {
    fn from(e: StoreError) -> Self {
        DemoError::Storage(e.to_string())
    }
}

/// Whole-collection persistence.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Create an empty collection if none exists. Returns true if one was created.
    async fn init(&self) -> std::result::Result<bool, StoreError>;
    async fn load(&self) -> std::result::Result<Vec<Item>, StoreError>;
    /// Replace the whole collection.
    async fn save(&self, items: &[Item]) -> std::result::Result<(), StoreError>;
    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

pub struct ItemStore {
    backend: Arc<dyn Backend>,
    write_lock: Mutex<()>,
}

impl ItemStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Ensure the collection exists; an existing one is left untouched.
    pub async fn init(&self) -> Result<()> {
        let created = self.backend.init().await.map_err(failure("init"))?;
        if created {
            tracing::info!(store = %self.describe(), "initialized empty collection");
        }
        Ok(())
    }

    pub async fn create(&self, new: NewItem) -> Result<Item> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.backend.load().await.map_err(failure("create"))?;
        let id = items.len() as i64 + 1;
        let item = Item::from_new(new, id, now_iso8601());
        items.push(item.clone());
        self.backend.save(&items).await.map_err(failure("create"))?;

        tracing::info!(id, count = items.len(), "item created");
        Ok(item)
    }

    /// All records in insertion order. A missing collection is empty.
    pub async fn list(&self) -> Result<Vec<Item>> {
        match self.backend.load().await {
            Ok(items) => Ok(items),
            Err(StoreError::Missing(_)) => Ok(Vec::new()),
            Err(e) => Err(failure("list")(e)),
        }
    }

    /// First record whose id matches.
    pub async fn get(&self, id: i64) -> Result<Item> {
        let items = self.backend.load().await.map_err(failure("get"))?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| DemoError::NotFound(NOT_FOUND_MESSAGE.into()))
    }

    /// Remove every record with `id`. Returns how many were removed.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.backend.load().await.map_err(failure("delete"))?;
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = before - items.len();
        self.backend.save(&items).await.map_err(failure("delete"))?;

        tracing::info!(id, removed, count = items.len(), "items deleted");
        Ok(removed)
    }
}

fn failure(op: &'static str) -> impl Fn(StoreError) -> DemoError {
    move |e| {
        tracing::warn!(op, error = %e, "storage failure");
        e.into()
    }
}
