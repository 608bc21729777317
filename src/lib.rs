//! jobspy-cli - command-line front end for the JobSpy scraper
//!
//! This library parses search parameters, hands them to a scraping backend,
//! and exports the returned job table as CSV or JSON.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Search parameters and result table
//! - [`error`]: Error types
//! - [`export`]: CSV and JSON writers
//! - [`scraper`]: Scraper abstraction layer

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod scraper;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
