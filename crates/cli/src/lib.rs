//! CLI utilities for the nursery locator
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Text/JSON output selection

#![warn(missing_docs)]

pub mod output;

pub use output::{OutputFormat, Status};
