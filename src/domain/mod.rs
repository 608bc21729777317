//! Domain models for jobspy-cli
//!
//! This module contains the search request and the tabular result set.
//! Types are validated on construction (fail-fast pattern).

pub mod search;
pub mod table;

pub use search::{split_list, split_optional_list, SearchParams, KNOWN_SITES};
pub use table::{ColumnKind, JobTable, Record};
