use std::path::PathBuf;

use serde::Deserialize;

use demohub_core::config::{check_version, LogSection, ServerSection, CONFIG_VERSION};
use demohub_core::error::{DemoError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemsConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub log: LogSection,

    #[serde(default)]
    pub storage: StorageSection,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerSection::default(),
            log: LogSection::default(),
            storage: StorageSection::default(),
        }
    }
}

impl ItemsConfig {
    pub fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()?;
        self.log.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    /// Backing file holding the whole collection as one JSON array.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self { data_file: default_data_file() }
    }
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(DemoError::BadRequest("storage.data_file must not be empty".into()));
        }
        Ok(())
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/data.json")
}
