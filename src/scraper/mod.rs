//! Scraper abstraction layer
//!
//! Provides a trait-based seam over the JobSpy backend for testability.

pub mod process;
pub mod traits;

pub use process::ProcessScraper;
pub use traits::JobScraper;
