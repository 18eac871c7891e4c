//! Core utilities for quicklinks
//!
//! This crate provides the pieces shared by every quicklinks surface:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: the TOML catalog of short links and search settings
//! - **Catalog**: key and alias resolution plus fuzzy search over the links
//! - **Validation**: detection of shadowed or duplicate aliases
//!
//! # Example
//!
//! ```rust
//! use quicklinks_core::config::Config;
//! use quicklinks_search::ScoreMode;
//!
//! let config = Config::from_toml_str(r#"
//!     [redirects.moodle]
//!     url = "https://moodle.example.org"
//!     description = "Learning platform"
//!     aliases = ["lms"]
//! "#).unwrap();
//!
//! let catalog = config.catalog();
//! assert_eq!(catalog.resolve("lms").unwrap().0, "moodle");
//!
//! let ranked = catalog.search("modle", ScoreMode::Fallback, None);
//! assert_eq!(ranked[0].key, "moodle");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod validation;

pub use catalog::{key_from_host, key_from_path, redirect_key, Catalog};
pub use error::{exit_codes, Error, ErrorCode, Result};
