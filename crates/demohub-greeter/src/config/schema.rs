use serde::Deserialize;

use demohub_core::config::{check_version, LogSection, ServerSection, CONFIG_VERSION};
use demohub_core::error::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreeterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerSection::default(),
            log: LogSection::default(),
        }
    }
}

impl GreeterConfig {
    pub fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
