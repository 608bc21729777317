//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod logging;
pub mod output;

pub use args::{Cli, OutputFormat};
