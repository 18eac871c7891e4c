//! Catalog and lookup errors
//!
//! Every failure carries an [`ErrorCode`] that maps onto a process exit
//! code, plus optional context and a hint for fixing it. `--json` runs print
//! the [`ErrorReport`] form.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes, grouped by thousands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Reading files (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Catalog file (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,

    // Lookups (4xxx)
    RedirectNotFound = 4001,

    // Bad input or catalog content (6xxx)
    ValidationError = 6000,
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Numeric value, e.g. `4001`
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Group name for reports
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            4 => "Lookup",
            _ => "Validation",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// A quicklinks failure
#[derive(Error, Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// What was being done when it failed
    pub context: Option<String>,
    /// How to fix it
    pub suggestion: Option<String>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Serializable form for `--json` output
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    /// Exit code a CLI should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self.code.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::NOT_FOUND,
            6 => exit_codes::VALIDATION_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Catalog file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a redirects.toml file or use --catalog to specify a path")
    }

    pub fn redirect_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::RedirectNotFound,
            format!("No redirect named '{}'", name),
        )
        .with_suggestion("Run `quicklinks search` to look for similar names")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
            .with_suggestion("Run `quicklinks check` after editing the catalog")
    }
}

/// Serializable error report for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the `quicklinks` binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// Invalid input or a catalog that fails `check`
    pub const VALIDATION_ERROR: i32 = 2;
    /// Catalog file missing or unreadable
    pub const CONFIG_ERROR: i32 = 3;
    /// Nothing matched the query or name
    pub const NOT_FOUND: i32 = 4;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

impl From<quicklinks_search::SearchError> for Error {
    fn from(err: quicklinks_search::SearchError) -> Self {
        Error::new(ErrorCode::InvalidInput, err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::RedirectNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::ConfigParseError.category(), "Configuration");
        assert_eq!(ErrorCode::RedirectNotFound.category(), "Lookup");
        assert_eq!(ErrorCode::InvalidInput.category(), "Validation");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::config_not_found("/path/to/redirects.toml")
            .with_context("While loading the catalog");

        assert_eq!(err.code, ErrorCode::ConfigNotFound);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
        assert!(err.to_string().contains("Context: While loading the catalog"));
    }

    #[test]
    fn test_io_error_kinds() {
        let missing: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(missing.code, ErrorCode::FileNotFound);

        let denied: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no").into();
        assert_eq!(denied.code, ErrorCode::PermissionDenied);
        assert_eq!(denied.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::redirect_not_found("x").exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(Error::config("bad").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::validation("bad").exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_search_error_conversion() {
        let err: Error = quicklinks_search::parse_candidates("[").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::redirect_not_found("mooodle")
            .with_context("Resolving path /mooodle");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E4001"));
        assert!(json.contains("Lookup"));
        assert!(json.contains("REDIRECT_NOT_FOUND"));
    }
}
