//! Config sections shared by both services.
//!
//! Every section is strict (`deny_unknown_fields`) and fully defaulted so a
//! service can start without a config file.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{DemoError, Result};

/// Only config schema version understood by this build.
pub const CONFIG_VERSION: u32 = 1;

/// Reject any version other than [`CONFIG_VERSION`].
pub fn check_version(version: u32) -> Result<()> {
    if version != CONFIG_VERSION {
        return Err(DemoError::UnsupportedVersion);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    /// Parsed listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            DemoError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(DemoError::BadRequest("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_filter() -> String {
    "info".into()
}
