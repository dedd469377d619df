//! Cache host configuration handed in by the hosting pipeline.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Candidate hostnames for the online cache.
///
/// The list is owned by the hosting application's configuration. Host
/// selection in `hopper-core` works on its own copy of `hosts`, so the same
/// config value can back any number of selection calls.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Hostnames eligible to serve the online cache.
    pub hosts: Vec<String>,
}

impl CacheConfig {
    pub fn new(hosts: Vec<String>) -> Self {
        Self { hosts }
    }

    /// Parses a TOML document of the form `hosts = ["cache01", "cache02"]`.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        debug!("loaded {} cache host(s)", config.hosts.len());
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }
}
