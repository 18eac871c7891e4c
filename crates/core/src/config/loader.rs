//! Configuration file loading

use super::schema::ConfigSchema;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and a missing file yields an empty catalog.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path
            .map(String::from)
            .or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            tracing::debug!("no catalog file found, using an empty catalog");
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Self {
            schema: toml::from_str(content)?,
            path: None,
        })
    }

    /// Build the searchable catalog from the configured redirects
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.schema.redirects.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        "redirects.toml",
        ".quicklinks.toml",
        ".config/quicklinks.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(|e| Error::from(e).with_context(format!("Failed to parse config file {}", path)))?;

    tracing::debug!(path, redirects = schema.redirects.len(), "loaded catalog");
    Ok(schema)
}
