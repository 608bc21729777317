//! Logger setup
//!
//! Logs go to stderr without timestamps. `RUST_LOG` picks the level,
//! defaulting to `warn`; `-v` forces `debug`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Logger builder for the given verbosity
pub fn logger_builder(verbose: bool) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}
