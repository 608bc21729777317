//! Tabular result set returned by the scraper
//!
//! The crate never interprets the columns; it only keeps their order,
//! guarantees every row has one cell per column, and remembers which
//! columns hold dates so text exports can render them.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// How the cells of a column should be read
///
/// Temporal cells arrive as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Cells are used as they are
    #[default]
    Plain,
    /// Calendar dates
    Date,
    /// Timestamps
    DateTime,
}

impl ColumnKind {
    /// Text form of a temporal cell, or `None` if the cell is not an
    /// epoch-milliseconds integer in a temporal column
    pub fn render_temporal(&self, value: &Value) -> Option<String> {
        let format = match self {
            ColumnKind::Plain => return None,
            ColumnKind::Date => "%Y-%m-%d",
            ColumnKind::DateTime => "%Y-%m-%d %H:%M:%S",
        };
        let millis = value.as_i64()?;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(millis)?;
        Some(timestamp.format(format).to_string())
    }
}

/// Rows of job postings with named, ordered columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobTable {
    columns: Vec<String>,
    kinds: Vec<ColumnKind>,
    rows: Vec<Vec<Value>>,
}

impl JobTable {
    /// Create a table, checking that column names are unique and rows are rectangular
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(DomainError::DuplicateColumn(column.clone()));
            }
        }

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(DomainError::RaggedRow {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }

        let kinds = vec![ColumnKind::Plain; columns.len()];
        Ok(Self {
            columns,
            kinds,
            rows,
        })
    }

    /// Mark columns with a non-plain kind
    pub fn with_column_kinds(
        mut self,
        kinds: &HashMap<String, ColumnKind>,
    ) -> Result<Self, DomainError> {
        for (name, kind) in kinds {
            let idx = self
                .columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| DomainError::UnknownColumn(name.clone()))?;
            self.kinds[idx] = *kind;
        }
        Ok(self)
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Kind of each column, aligned with [`columns`](Self::columns)
    pub fn column_kinds(&self) -> &[ColumnKind] {
        &self.kinds
    }

    /// All rows in order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A copy holding at most the first `n` rows
    pub fn head(&self, n: usize) -> JobTable {
        Self {
            columns: self.columns.clone(),
            kinds: self.kinds.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Iterate rows as column-keyed records
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |cells| Record {
            columns: &self.columns,
            cells,
        })
    }
}

/// Serializes as an array of row objects
impl Serialize for JobTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in self.records() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}

/// One row viewed as a column-keyed record
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    cells: &'a [Value],
}

/// Serializes as an object whose keys follow column order
impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JobTable {
        JobTable::new(
            vec!["title".to_string(), "company".to_string()],
            vec![
                vec![json!("Backend Engineer"), json!("Acme")],
                vec![json!("SRE"), Value::Null],
                vec![json!("Data Engineer"), json!("Globex")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = JobTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1), json!(2)], vec![json!(3)]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = JobTable::new(vec!["a".to_string(), "a".to_string()], vec![]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn test_head() {
        let table = sample();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert_eq!(table.head(0).columns(), table.columns());
    }

    #[test]
    fn test_record_serializes_nulls() {
        let table = sample();
        let second = table.records().nth(1).unwrap();
        assert_eq!(
            serde_json::to_value(second).unwrap(),
            json!({"title": "SRE", "company": null})
        );
    }

    #[test]
    fn test_column_kinds() {
        let kinds = HashMap::from([("company".to_string(), ColumnKind::Date)]);
        let table = sample().with_column_kinds(&kinds).unwrap();
        assert_eq!(
            table.column_kinds(),
            [ColumnKind::Plain, ColumnKind::Date]
        );
        assert_eq!(table.head(1).column_kinds(), table.column_kinds());
    }

    #[test]
    fn test_column_kinds_reject_unknown_column() {
        let kinds = HashMap::from([("salary".to_string(), ColumnKind::Date)]);
        let err = sample().with_column_kinds(&kinds).unwrap_err();
        assert_eq!(err, DomainError::UnknownColumn("salary".to_string()));
    }

    #[test]
    fn test_render_temporal() {
        // 2024-05-01T13:45:30Z
        let cell = json!(1_714_571_130_000_i64);
        assert_eq!(
            ColumnKind::Date.render_temporal(&cell).as_deref(),
            Some("2024-05-01")
        );
        assert_eq!(
            ColumnKind::DateTime.render_temporal(&cell).as_deref(),
            Some("2024-05-01 13:45:30")
        );
        assert_eq!(ColumnKind::Plain.render_temporal(&cell), None);
        assert_eq!(ColumnKind::Date.render_temporal(&json!("2024-05-01")), None);
        assert_eq!(ColumnKind::Date.render_temporal(&Value::Null), None);
    }

    #[test]
    fn test_serializes_records_in_column_order() {
        let table = JobTable::new(
            vec!["z_last".to_string(), "a_first".to_string()],
            vec![vec![json!(1), json!(2)]],
        )
        .unwrap();
        let text = serde_json::to_string(&table).unwrap();
        assert_eq!(text, r#"[{"z_last":1,"a_first":2}]"#);
    }

    #[test]
    fn test_empty_table_serializes_to_empty_array() {
        let text = serde_json::to_string(&JobTable::default()).unwrap();
        assert_eq!(text, "[]");
    }
}
