//! CSV export
//!
//! Header row of column names, then one record per row. Quoting follows the
//! cell type: numbers and booleans are written bare, everything else is
//! quoted. Inside quotes, `"` is doubled and `\` is doubled. Date columns
//! are written as ISO text. No index column is written.

use crate::domain::{ColumnKind, JobTable};
use crate::error::ExportError;
use ::csv::{QuoteStyle, WriterBuilder};
use serde_json::Value;
use std::io::Write;

/// Write the table as CSV
pub fn write_csv<W: Write>(table: &JobTable, writer: W) -> Result<(), ExportError> {
    // Fields arrive already quoted and escaped.
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(table.columns().iter().map(|c| quote(c)))?;
    for row in table.rows() {
        let fields = row
            .iter()
            .zip(table.column_kinds())
            .map(|(value, kind)| render_field(value, *kind));
        wtr.write_record(fields)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Encoded form of one cell
///
/// Nulls become `""`, booleans `True`/`False`, nested values compact JSON.
fn render_field(value: &Value, kind: ColumnKind) -> String {
    if let Some(text) = kind.render_temporal(value) {
        return quote(&text);
    }
    match value {
        Value::Null => quote(""),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(_) | Value::Object(_) => quote(&value.to_string()),
    }
}

fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\"\"");
    format!("\"{}\"", escaped)
}
