//! Configuration schema definitions
//!
//! The catalog file holds the short links themselves plus a few settings for
//! searching them.

use quicklinks_search::{Aliases, ScoreMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Domain the links are served under, e.g. `example.org`
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub search: SearchConfig,

    /// Short links by key
    #[serde(default)]
    pub redirects: BTreeMap<String, RedirectEntry>,
}

/// A single short link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// Target URL
    pub url: String,

    /// Human-readable description shown in listings
    #[serde(default)]
    pub description: String,

    /// Alternative names that resolve to the same target
    #[serde(default)]
    pub aliases: Aliases,
}

/// Search box configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Suggest similarly spelled links when nothing matches strictly
    #[serde(default = "default_true")]
    pub fallback: bool,

    /// Maximum results to show (0 for all)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl SearchConfig {
    /// Scoring mode implied by the `fallback` setting
    pub fn mode(&self) -> ScoreMode {
        if self.fallback { ScoreMode::Fallback } else { ScoreMode::Strict }
    }

    /// Result limit, with 0 meaning unlimited
    pub fn limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fallback: true,
            max_results: default_max_results(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}
