//! Configuration loading and schema definitions
//!
//! Settings live in a TOML file; every field has a default so a missing
//! file or a partial file both work.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;
