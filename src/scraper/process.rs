//! Subprocess-backed scraper
//!
//! Runs the JobSpy backend as a child process. The search parameters are
//! written to its stdin as one JSON object, and the result table is read
//! from its stdout in pandas "split" orientation:
//! `{"columns": [...], "data": [[...], ...]}`. Dates travel as epoch
//! milliseconds; an optional `"kinds"` object names the temporal columns,
//! e.g. `{"date_posted": "date"}`.

use crate::config::ScraperConfig;
use crate::domain::{ColumnKind, JobTable, SearchParams};
use crate::error::ScrapeError;
use crate::scraper::JobScraper;

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

/// Python bridge that calls `jobspy.scrape_jobs`
pub const BRIDGE_SCRIPT: &str = include_str!("bridge.py");

/// Scraper that delegates to an external program
#[derive(Debug, Clone)]
pub struct ProcessScraper {
    program: String,
    args: Vec<String>,
}

#[derive(Deserialize)]
struct SplitPayload {
    columns: Vec<String>,
    data: Vec<Vec<Value>>,
    #[serde(default)]
    kinds: HashMap<String, ColumnKind>,
}

impl ProcessScraper {
    /// Create a scraper running `program` with `args`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Create a scraper from configuration
    ///
    /// Without explicit arguments the program is treated as a Python
    /// interpreter and given the bridge script.
    pub fn from_config(config: &ScraperConfig) -> Self {
        let args = config
            .args
            .clone()
            .unwrap_or_else(|| vec!["-c".to_string(), BRIDGE_SCRIPT.to_string()]);
        Self::new(config.program.clone(), args)
    }

    /// Program that will be launched
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl JobScraper for ProcessScraper {
    fn scrape_jobs(&self, params: &SearchParams) -> Result<JobTable, ScrapeError> {
        let request = serde_json::to_vec(params)?;

        log::debug!("Spawning scraper backend: {}", self.program);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ScrapeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the backend sees EOF. A backend
        // that exits early breaks the pipe; its exit status decides the error.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&request),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(ScrapeError::BackendFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        written?;

        if !stderr.trim().is_empty() {
            log::debug!("Scraper backend stderr: {}", stderr.trim());
        }

        parse_payload(&output.stdout)
    }
}

/// Decode a split-orientation table
pub fn parse_payload(bytes: &[u8]) -> Result<JobTable, ScrapeError> {
    let payload: SplitPayload = serde_json::from_slice(bytes)
        .map_err(|e| ScrapeError::InvalidPayload(e.to_string()))?;

    JobTable::new(payload.columns, payload.data)
        .and_then(|table| table.with_column_kinds(&payload.kinds))
        .map_err(|e| ScrapeError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        let table = parse_payload(
            br#"{"columns":["title","min_amount"],"data":[["Engineer",100000],["Analyst",null]]}"#,
        )
        .unwrap();

        assert_eq!(table.columns(), ["title", "min_amount"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][1], json!(100000));
    }

    #[test]
    fn test_parse_payload_reads_column_kinds() {
        let table = parse_payload(
            br#"{"columns":["title","date_posted"],"data":[["Engineer",1714521600000]],"kinds":{"date_posted":"date"}}"#,
        )
        .unwrap();

        assert_eq!(table.column_kinds(), [ColumnKind::Plain, ColumnKind::Date]);
        assert_eq!(table.rows()[0][1], json!(1714521600000_i64));
    }

    #[test]
    fn test_parse_payload_rejects_kind_for_missing_column() {
        let err = parse_payload(
            br#"{"columns":["title"],"data":[],"kinds":{"date_posted":"date"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPayload(_)));
        assert!(err.to_string().contains("date_posted"));
    }

    #[test]
    fn test_parse_payload_rejects_garbage() {
        let err = parse_payload(b"Traceback (most recent call last)").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidPayload(_)));
    }

    #[test]
    fn test_parse_payload_rejects_ragged_rows() {
        let err = parse_payload(br#"{"columns":["a","b"],"data":[[1]]}"#).unwrap_err();
        assert!(err.to_string().contains("Row 0"));
    }

    #[test]
    fn test_from_config_uses_bridge_by_default() {
        let scraper = ProcessScraper::from_config(&Config::default().scraper);
        assert_eq!(scraper.program(), "python3");
        assert_eq!(scraper.args[0], "-c");
        assert!(scraper.args[1].contains("scrape_jobs(**params)"));
        assert!(scraper.args[1].contains("payload[\"kinds\"]"));
    }

    #[test]
    fn test_from_config_explicit_args() {
        let config = ScraperConfig {
            program: "docker".to_string(),
            args: Some(vec!["run".to_string(), "-i".to_string(), "jobspy".to_string()]),
        };
        let scraper = ProcessScraper::from_config(&config);
        assert_eq!(scraper.args, vec!["run", "-i", "jobspy"]);
    }

    #[test]
    fn test_spawn_failure() {
        let scraper = ProcessScraper::new("/nonexistent/jobspy-backend", vec![]);
        let err = scraper
            .scrape_jobs(&Config::default().search_params())
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_backend_receives_params_on_stdin() {
        // The fake backend only answers if the site list arrived intact.
        let script = r#"grep -qF '"site_name":["indeed","google"]' && printf '{"columns":["title"],"data":[["Engineer"]]}'"#;
        let scraper = ProcessScraper::new("sh", vec!["-c".to_string(), script.to_string()]);

        let mut params = Config::default().search_params();
        params.site_name = vec!["indeed".to_string(), "google".to_string()];

        let table = scraper.scrape_jobs(&params).unwrap();
        assert_eq!(table.columns(), ["title"]);
        assert_eq!(table.rows()[0][0], json!("Engineer"));
    }

    #[cfg(unix)]
    #[test]
    fn test_backend_failure_captures_stderr() {
        let scraper = ProcessScraper::new(
            "sh",
            vec![
                "-c".to_string(),
                "cat >/dev/null; echo 'no matching sites' >&2; exit 3".to_string(),
            ],
        );

        let err = scraper
            .scrape_jobs(&Config::default().search_params())
            .unwrap_err();
        match err {
            ScrapeError::BackendFailed { stderr, .. } => assert_eq!(stderr, "no matching sites"),
            other => panic!("Expected BackendFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_backend_exiting_before_reading_stdin() {
        // The backend never reads its stdin, so a request larger than the
        // pipe buffer fails to write; the exit status still wins.
        let scraper = ProcessScraper::new(
            "sh",
            vec![
                "-c".to_string(),
                "echo \"ModuleNotFoundError: No module named 'jobspy'\" >&2; exit 1".to_string(),
            ],
        );

        let mut params = Config::default().search_params();
        params.search_term = "x".repeat(1 << 20);

        let err = scraper.scrape_jobs(&params).unwrap_err();
        assert!(err.is_missing_jobspy(), "unexpected error: {err:?}");
        match err {
            ScrapeError::BackendFailed { status, .. } => assert!(status.contains('1')),
            other => panic!("Expected BackendFailed, got {other:?}"),
        }
    }
}
