//! Unified error types for jobspy-cli
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the scraping backend
    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScrapeError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while serializing or writing the result set
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the scraping collaborator
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Backend program could not be started
    #[error("Failed to start scraper backend '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Backend ran but exited unsuccessfully
    #[error("Scraper backend exited with {status}: {stderr}")]
    BackendFailed { status: String, stderr: String },

    /// Backend produced output that is not a result table
    #[error("Invalid scraper payload: {0}")]
    InvalidPayload(String),

    /// Search parameters could not be encoded for the backend
    #[error("Failed to encode search request: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error talking to the backend
    #[error("Scraper IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Whether the backend failed because the `jobspy` package is missing
    pub fn is_missing_jobspy(&self) -> bool {
        match self {
            ScrapeError::BackendFailed { stderr, .. } => {
                stderr.contains("No module named 'jobspy'")
                    || stderr.contains("No module named jobspy")
            }
            _ => false,
        }
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A row does not have one cell per column
    #[error("Row {row} has {found} cells but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Column names must be unique
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column kind names a column the table does not have
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from result-set serialization
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying sink failed
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
