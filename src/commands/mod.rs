//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod search;

pub use search::{build_config, run_search, search_and_export};
