//! JSON file backend.
//!
//! The collection is one pretty-printed JSON array. Saves write a sibling
//! `*.tmp` file and rename it over the target, so readers see either the old
//! or the new collection, never a partial one.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use demohub_core::model::Item;

use super::{Backend, StoreError};

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("data"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Backend for JsonFileBackend {
    async fn init(&self) -> Result<bool, StoreError> {
        if fs::try_exists(&self.path).await.map_err(StoreError::Io)? {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(StoreError::Io)?;
        }
        self.save(&[]).await?;
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<Item>, StoreError> {
        let bytes = fs::read(&self.path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::Missing(e),
            _ => StoreError::Io(e),
        })?;
        serde_json::from_slice(&bytes).map_err(StoreError::Malformed)
    }

    async fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let mut buf = serde_json::to_vec_pretty(items).map_err(StoreError::Malformed)?;
        buf.push(b'\n');

        let tmp = self.tmp_path();
        fs::write(&tmp, &buf).await.map_err(StoreError::Io)?;
        fs::rename(&tmp, &self.path).await.map_err(StoreError::Io)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn item(id: i64) -> Item {
        Item {
            name: format!("n{id}"),
            value: "v".into(),
            timestamp: "t".into(),
            id,
            created_at: "2024-01-01T00:00:00.000000Z".into(),
        }
    }

    #[tokio::test]
    async fn init_creates_parent_and_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");
        let backend = JsonFileBackend::new(&path);

        assert!(backend.init().await.unwrap());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
        assert!(backend.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let backend = JsonFileBackend::new(&path);
        backend.save(&[item(1)]).await.unwrap();

        assert!(!backend.init().await.unwrap());
        assert_eq!(backend.load().await.unwrap(), vec![item(1)]);
    }

    #[tokio::test]
    async fn save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("data.json"));
        backend.save(&[item(1), item(2)]).await.unwrap();
        backend.save(&[item(3)]).await.unwrap();

        assert_eq!(backend.load().await.unwrap(), vec![item(3)]);
        assert!(!backend.tmp_path().exists());
    }

    #[tokio::test]
    async fn on_disk_layout_is_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let backend = JsonFileBackend::new(&path);
        backend.save(&[item(1)]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"name\": \"n1\","));
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["id"], 1);
    }

    #[tokio::test]
    async fn missing_and_malformed_are_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let backend = JsonFileBackend::new(&path);
        assert!(matches!(backend.load().await, Err(StoreError::Missing(_))));

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(backend.load().await, Err(StoreError::Malformed(_))));
    }
}
