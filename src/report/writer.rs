//! Report serialization (CSV and JSON)

use super::table::ReportRow;
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render rows (header included) as CSV text with `\r\n` line ends
pub fn to_csv(rows: &[ReportRow]) -> String {
    let mut csv_content = String::new();
    for row in rows {
        let line: Vec<_> = row.fields().into_iter().map(escape_field).collect();
        csv_content.push_str(&line.join(","));
        csv_content.push_str("\r\n");
    }
    csv_content
}

/// Render the data rows as a JSON array; the header row is skipped since
/// the object keys carry the column names
pub fn to_json(rows: &[ReportRow]) -> Result<String> {
    let data = rows.get(1..).unwrap_or_default();
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn write_csv(rows: &[ReportRow], path: &Path) -> Result<()> {
    write_report(path, to_csv(rows))
}

pub fn write_json(rows: &[ReportRow], path: &Path) -> Result<()> {
    write_report(path, to_json(rows)?)
}

fn write_report(path: &Path, content: String) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Report {
        path: path.to_path_buf(),
        source,
    })
}
