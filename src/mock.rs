//! Mock implementations for testing
//!
//! Provides a scriptable scraper for exercising the search flow without a
//! JobSpy backend.

use crate::domain::{ColumnKind, JobTable, SearchParams};
use crate::error::ScrapeError;
use crate::scraper::JobScraper;

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Outcome the mock returns from every call
#[derive(Debug, Clone)]
enum MockResponse {
    Table(JobTable),
    Failure(String),
}

/// Mock scraper for testing
///
/// Records every request it receives.
#[derive(Debug)]
pub struct MockScraper {
    response: MockResponse,
    calls: Mutex<Vec<SearchParams>>,
}

impl MockScraper {
    /// Mock that returns `table`
    pub fn returning(table: JobTable) -> Self {
        Self {
            response: MockResponse::Table(table),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails as if the backend exited with `stderr`
    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Failure(stderr.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock returning [`sample_jobs`] with `rows` rows
    pub fn with_sample_jobs(rows: usize) -> Self {
        Self::returning(sample_jobs(rows))
    }

    /// Number of scrape calls made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Parameters of the most recent call
    pub fn last_params(&self) -> Option<SearchParams> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl JobScraper for MockScraper {
    fn scrape_jobs(&self, params: &SearchParams) -> Result<JobTable, ScrapeError> {
        self.calls.lock().unwrap().push(params.clone());
        match &self.response {
            MockResponse::Table(table) => Ok(table.clone()),
            MockResponse::Failure(stderr) => Err(ScrapeError::BackendFailed {
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
        }
    }
}

/// Job table shaped like JobSpy output
pub fn sample_jobs(rows: usize) -> JobTable {
    let columns = [
        "id",
        "site",
        "job_url",
        "title",
        "company",
        "location",
        "date_posted",
        "min_amount",
        "is_remote",
        "description",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let data = (0..rows)
        .map(|i| -> Vec<Value> {
            vec![
                json!(format!("in-{:04}", i)),
                json!("indeed"),
                json!(format!("https://www.indeed.com/viewjob?jk={:04}", i)),
                json!(format!("Software Engineer {}", i)),
                if i % 3 == 2 {
                    Value::Null
                } else {
                    json!(format!("Company {}", i))
                },
                json!("San Francisco, CA"),
                json!(1_700_000_000_000_i64 + 86_400_000 * i as i64),
                json!(100_000 + 5_000 * i as i64),
                json!(i % 2 == 0),
                json!(format!("Build \"great\" things, role #{}", i)),
            ]
        })
        .collect();

    let kinds = HashMap::from([("date_posted".to_string(), ColumnKind::Date)]);

    // Columns and rows are built together above, so the shape always matches.
    JobTable::new(columns, data)
        .and_then(|table| table.with_column_kinds(&kinds))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls() {
        let mock = MockScraper::with_sample_jobs(2);
        let params = crate::config::Config::default().search_params();

        let table = mock.scrape_jobs(&params).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_params(), Some(params));
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockScraper::failing("boom");
        let params = crate::config::Config::default().search_params();
        assert!(mock.scrape_jobs(&params).is_err());
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_sample_jobs_shape() {
        let table = sample_jobs(4);
        assert_eq!(table.len(), 4);
        assert_eq!(table.columns().len(), 10);
        assert_eq!(table.column_kinds()[6], ColumnKind::Date);
    }
}
