//! Search parameter domain type
//!
//! Provides the immutable `SearchParams` record handed to the scraper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job boards the JobSpy backend knows how to scrape
pub const KNOWN_SITES: &[&str] = &[
    "indeed",
    "linkedin",
    "zip_recruiter",
    "glassdoor",
    "google",
    "bayt",
    "naukri",
];

/// Parameters for a single scrape invocation
///
/// Field names match the keyword arguments of the backend's `scrape_jobs`
/// so the record serializes directly into the request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Site identifiers, in the order given
    pub site_name: Vec<String>,
    /// Search term for most boards
    pub search_term: String,
    /// Search term used only by Google Jobs
    pub google_search_term: String,
    /// Location for the search
    pub location: String,
    /// Number of results wanted per site
    pub results_wanted: i64,
    /// Maximum posting age in hours
    pub hours_old: i64,
    /// Country used by Indeed and Glassdoor
    pub country_indeed: String,
    /// Fetch full LinkedIn descriptions (slower)
    pub linkedin_fetch_description: bool,
    /// Proxies to route requests through; `None` disables proxying
    pub proxies: Option<Vec<String>>,
}

impl SearchParams {
    /// Site identifiers that are not in [`KNOWN_SITES`]
    pub fn unknown_sites(&self) -> Vec<&str> {
        self.site_name
            .iter()
            .map(String::as_str)
            .filter(|site| !KNOWN_SITES.contains(site))
            .collect()
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in {} on [{}]",
            self.search_term,
            self.location,
            self.site_name.join(", ")
        )
    }
}

/// Split a comma-separated list into its items
///
/// Items are kept verbatim and in order; no trimming or deduplication.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Split an optional comma-separated list
///
/// An absent or empty value yields `None` rather than a list holding an
/// empty string.
pub fn split_optional_list(raw: Option<&str>) -> Option<Vec<String>> {
    match raw {
        Some(value) if !value.is_empty() => Some(split_list(value)),
        _ => None,
    }
}
