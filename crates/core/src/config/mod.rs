//! Configuration loading and schema definitions
//!
//! The catalog of short links and the settings used to search it.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
