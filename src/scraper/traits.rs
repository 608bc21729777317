//! Trait definitions for the scraping collaborator
//!
//! This trait abstracts the backend to enable testing with stubs.

use crate::domain::{JobTable, SearchParams};
use crate::error::ScrapeError;

/// A source of job postings
///
/// Implementations run one complete search per call. Any failure is
/// returned as-is; callers do not retry or salvage partial results.
pub trait JobScraper {
    /// Run a search and return every posting found
    fn scrape_jobs(&self, params: &SearchParams) -> Result<JobTable, ScrapeError>;
}
