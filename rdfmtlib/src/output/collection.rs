//! Render paths for in-memory rows.

use super::row::{push_row, row_string};
use crate::options::Separators;
use crate::Row;

/// Render a single row. No line separator is involved.
///
/// Returns `None` for an absent row.
pub fn format_map(row: Option<&Row>, col_sep: &str) -> Option<String> {
    let row = row?;
    Some(row_string(row.values().map(|v| v.non_null()), col_sep))
}

/// Render a list of rows joined by the line separator.
///
/// Returns `None` for an absent list and an empty string for an empty one.
pub fn format_map_list(rows: Option<&[Row]>, seps: &Separators) -> Option<String> {
    let rows = rows?;
    let mut buffer = String::new();
    if !rows.is_empty() {
        for row in rows {
            push_row(&mut buffer, row.values().map(|v| v.non_null()), &seps.column);
            buffer.push_str(&seps.line);
        }
        buffer.truncate(buffer.len() - seps.line.len());
    }
    Some(buffer)
}
