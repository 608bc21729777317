//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{split_list, split_optional_list, SearchParams};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Search defaults
    pub search: SearchConfig,
    /// Scraper backend settings
    pub scraper: ScraperConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Check values that the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scraper.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "scraper.program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.output.preview_rows == 0 {
            return Err(ConfigError::InvalidValue {
                key: "output.preview_rows".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Build the immutable search record for one invocation
    pub fn search_params(&self) -> SearchParams {
        SearchParams::from(&self.search)
    }
}

/// Search parameters as they appear in config files and on the command line
///
/// List-valued settings stay comma-separated strings here and are split
/// when the [`SearchParams`] record is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Comma-separated site identifiers
    pub site_name: String,
    /// Search term
    pub search_term: String,
    /// Google specific search term
    pub google_search_term: String,
    /// Location
    pub location: String,
    /// Number of results wanted
    pub results_wanted: i64,
    /// Maximum posting age in hours
    pub hours_old: i64,
    /// Country for Indeed search
    pub country_indeed: String,
    /// Fetch LinkedIn descriptions
    pub linkedin_fetch_description: bool,
    /// Comma-separated proxies
    pub proxies: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site_name: "indeed".to_string(),
            search_term: "software engineer".to_string(),
            google_search_term: "software engineer jobs near San Francisco, CA since yesterday"
                .to_string(),
            location: "San Francisco, CA".to_string(),
            results_wanted: 20,
            hours_old: 72,
            country_indeed: "USA".to_string(),
            linkedin_fetch_description: false,
            proxies: None,
        }
    }
}

impl From<&SearchConfig> for SearchParams {
    fn from(config: &SearchConfig) -> Self {
        Self {
            site_name: split_list(&config.site_name),
            search_term: config.search_term.clone(),
            google_search_term: config.google_search_term.clone(),
            location: config.location.clone(),
            results_wanted: config.results_wanted,
            hours_old: config.hours_old,
            country_indeed: config.country_indeed.clone(),
            linkedin_fetch_description: config.linkedin_fetch_description,
            proxies: split_optional_list(config.proxies.as_deref()),
        }
    }
}

/// Scraper backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScraperConfig {
    /// Program to launch
    pub program: String,
    /// Arguments for the program; when unset the built-in bridge script is
    /// passed to the interpreter with `-c`
    pub args: Option<Vec<String>>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: None,
        }
    }
}

/// Where the CSV head preview goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewTarget {
    /// Written to the data file handle before the CSV body replaces it
    #[default]
    DataFile,
    /// Written to standard error
    Stderr,
    /// Not written
    Off,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination of the preview emitted when writing CSV to a file
    pub csv_preview: PreviewTarget,
    /// Rows included in the preview
    pub preview_rows: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_preview: PreviewTarget::DataFile,
            preview_rows: 5,
        }
    }
}
