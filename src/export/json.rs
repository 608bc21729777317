//! JSON export
//!
//! An array of row objects, keys in column order, 2-space indentation.

use crate::domain::JobTable;
use crate::error::ExportError;
use std::io::Write;

/// Render the table as pretty-printed JSON
pub fn to_json_string(table: &JobTable) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Write the table as pretty-printed JSON followed by a newline
///
/// The document is rendered in full before anything reaches `writer`.
pub fn write_json<W: Write>(table: &JobTable, mut writer: W) -> Result<(), ExportError> {
    let json = to_json_string(table)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
