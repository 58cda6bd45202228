//! Item store config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use demohub_core::error::{DemoError, Result};

pub use schema::{ItemsConfig, StorageSection};

/// Env var naming an alternative config path.
pub const CONFIG_ENV: &str = "DEMOHUB_ITEMS_CONFIG";
/// Config path used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_PATH: &str = "items.yaml";

pub fn load_from_file(path: &str) -> Result<ItemsConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DemoError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ItemsConfig> {
    let cfg: ItemsConfig = serde_yaml::from_str(s)
        .map_err(|e| DemoError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// Returns whether a file was read alongside the config.
pub fn load_or_default(path: &str) -> Result<(ItemsConfig, bool)> {
    if Path::new(path).exists() {
        Ok((load_from_file(path)?, true))
    } else {
        Ok((ItemsConfig::default(), false))
    }
}

/// Resolve the config path from the environment.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_PATH.to_string())
}
