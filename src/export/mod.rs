//! Result-set export
//!
//! Serializes a [`JobTable`](crate::domain::JobTable) as CSV or JSON into
//! any `Write` sink, and resolves where the output should go.

pub mod csv;
pub mod json;

pub use self::csv::write_csv;
pub use self::json::{to_json_string, write_json};

use crate::cli::OutputFormat;
use std::path::PathBuf;

/// Destination for the exported result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// File named `<base>.<extension>`
    File(String),
    /// Standard output
    Stdout,
}

impl OutputTarget {
    /// Target for an optional `--output` value
    pub fn from_output(output: Option<&str>) -> Self {
        match output {
            Some(base) => OutputTarget::File(base.to_string()),
            None => OutputTarget::Stdout,
        }
    }

    /// Full file path for `format`, or `None` for stdout
    pub fn file_path(&self, format: OutputFormat) -> Option<PathBuf> {
        match self {
            OutputTarget::File(base) => {
                Some(PathBuf::from(format!("{}.{}", base, format.extension())))
            }
            OutputTarget::Stdout => None,
        }
    }
}
