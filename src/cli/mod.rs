//! CLI interface for wordtool
//!
//! Parses options into engine constraints, runs the search, and writes the
//! results.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, FilterArgs};
pub use commands::execute;
pub use paths::{config_dir, PersistentConfig};
