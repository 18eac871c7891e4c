//! CLI utilities for quicklinks tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Match highlighting for terminals

#![warn(missing_docs)]

pub mod output;
