//! Human-readable table rendering
//!
//! Used for the row preview shown before a CSV file is written.

use crate::domain::{ColumnKind, JobTable};
use serde_json::Value;

/// Widest a preview cell may get before it is truncated
const MAX_CELL_WIDTH: usize = 24;

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;
}

impl TableDisplay for JobTable {
    fn to_table(&self) -> String {
        if self.columns().is_empty() {
            return "Empty table".to_string();
        }

        let index_width = self.len().saturating_sub(1).to_string().len();
        let cells: Vec<Vec<String>> = self
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.column_kinds())
                    .map(|(value, kind)| preview_cell(value, *kind))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                cells
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(truncate(column).chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = " ".repeat(index_width);
        for (column, width) in self.columns().iter().zip(&widths) {
            output.push_str(&format!("  {:>width$}", truncate(column), width = width));
        }
        output.push('\n');

        for (idx, row) in cells.iter().enumerate() {
            output.push_str(&format!("{:<width$}", idx, width = index_width));
            for (cell, width) in row.iter().zip(&widths) {
                output.push_str(&format!("  {:>width$}", cell, width = width));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "\n[{} rows x {} columns]",
            self.len(),
            self.columns().len()
        ));
        output
    }
}

fn preview_cell(value: &Value, kind: ColumnKind) -> String {
    if let Some(text) = kind.render_temporal(value) {
        return truncate(&text);
    }
    let text = match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.replace(['\n', '\r'], " "),
        other => other.to_string(),
    };
    truncate(&text)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{}...", kept)
}
