//! Site configuration loading.
//!
//! Reads `siteConfig.toml` (or a `.json` file) into a [`SiteConfig`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::SiteConfig;

/// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {} as TOML: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse {} as JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SiteConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            serde_json::from_str::<SiteConfig>(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str::<SiteConfig>(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        debug!(
            path = %path.display(),
            base_url = %config.base_url,
            users = config.users.len(),
            "loaded site config"
        );
        Ok(config)
    }
}
