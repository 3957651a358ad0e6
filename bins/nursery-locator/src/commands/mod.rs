//! Subcommand implementations

pub mod list;
pub mod map;
pub mod nearest;
pub mod validate;
