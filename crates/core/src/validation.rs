//! Catalog validation
//!
//! Checks a catalog for entries that would resolve ambiguously or not at
//! all:
//! - aliases shadowed by another link's key
//! - aliases claimed by more than one link
//! - links without a target URL
//!
//! # Example
//!
//! ```rust,ignore
//! use quicklinks_core::{config::Config, validation::validate_catalog};
//!
//! let catalog = Config::load(None)?.catalog();
//! let result = validate_catalog(&catalog);
//!
//! for error in result.errors() {
//!     eprintln!("Validation error: {}", error);
//! }
//! ```

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>, code: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::validation(format!("Validation failed: {}", messages.join("; "))))
        }
    }
}

/// Validate every link in a catalog
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    let owners = catalog.alias_owners();

    for (key, entry) in catalog.entries() {
        let field = format!("redirects.{}", key);

        if entry.url.trim().is_empty() {
            result.add_error(ValidationError::new(&field, "URL is empty", "EMPTY_URL"));
        } else if !entry.url.starts_with("https://") && !entry.url.starts_with("http://") {
            result.add_warning(ValidationError::new(
                &field,
                format!("URL '{}' has no http(s) scheme", entry.url),
                "URL_SCHEME",
            ));
        }

        if entry.description.trim().is_empty() {
            result.add_warning(ValidationError::new(&field, "Description is empty", "EMPTY_DESCRIPTION"));
        }

        for alias in entry.aliases.iter() {
            if alias.is_empty() {
                result.add_warning(ValidationError::new(&field, "Empty alias", "EMPTY_ALIAS"));
                continue;
            }

            if alias == key {
                result.add_warning(ValidationError::new(
                    &field,
                    format!("Alias '{}' repeats the key", alias),
                    "REDUNDANT_ALIAS",
                ));
                continue;
            }

            if catalog.get(alias).is_some() {
                result.add_error(ValidationError::new(
                    &field,
                    format!("Alias '{}' is shadowed by the link with that key", alias),
                    "SHADOWED_ALIAS",
                ));
                continue;
            }

            match owners.get(alias) {
                Some(owner) if owner != key => result.add_error(ValidationError::new(
                    &field,
                    format!("Alias '{}' is already claimed by '{}'", alias, owner),
                    "DUPLICATE_ALIAS",
                )),
                _ => {}
            }
        }
    }

    result
}
