//! Render paths for cursors: record sets and query results.
//!
//! Each source has a streaming form (`write_*`, returns the row count)
//! and a string form (`format_*`). The line separator only ever joins
//! rows; no trailing separator is emitted.

use std::io::Write;

use tracing::{debug, warn};

use super::row::row_string;
use crate::options::Separators;
use crate::source::{RecordCursor, ResultCursor};
use crate::value::{is_native_type, Cell};
use crate::Result;

/// A result set column after metadata resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedColumn {
    /// Upper-cased column name
    name: String,
    /// Read with the native accessor instead of the text one
    native: bool,
}

/// Write a record cursor to `sink` in RD format.
///
/// The cursor is rewound first, so every row is written even if the
/// cursor was consumed before. Returns the number of rows written; an
/// absent cursor writes nothing and returns 0.
pub fn write_records<W, C>(
    sink: &mut W,
    source: Option<&mut C>,
    seps: &Separators,
) -> Result<usize>
where
    W: Write + ?Sized,
    C: RecordCursor + ?Sized,
{
    let Some(cursor) = source else {
        return Ok(0);
    };
    render_records(cursor, seps, |chunk| Ok(sink.write_all(chunk.as_bytes())?))
}

/// Render a record cursor to an RD string.
///
/// Returns `None` for an absent cursor.
pub fn format_records<C>(source: Option<&mut C>, seps: &Separators) -> Result<Option<String>>
where
    C: RecordCursor + ?Sized,
{
    let Some(cursor) = source else {
        return Ok(None);
    };
    let mut buffer = String::new();
    render_records(cursor, seps, |chunk| {
        buffer.push_str(chunk);
        Ok(())
    })?;
    Ok(Some(buffer))
}

/// Write a query result cursor to `sink` in RD format.
///
/// Takes ownership of the cursor: it is closed, and its statement after
/// it, whether or not rendering succeeds. Returns the number of rows
/// written; an absent cursor writes nothing and returns 0.
///
/// What "closing the statement" releases is up to the cursor. A
/// [`SqliteCursor`](crate::SqliteCursor) borrows its statement, so closing
/// it only resets the statement; finalizing it stays with the owner, on drop.
pub fn write_result_set<W, C>(sink: &mut W, source: Option<C>, seps: &Separators) -> Result<usize>
where
    W: Write + ?Sized,
    C: ResultCursor,
{
    let Some(mut cursor) = source else {
        return Ok(0);
    };
    let rendered = render_result_set(&mut cursor, seps, |chunk| {
        Ok(sink.write_all(chunk.as_bytes())?)
    });
    finish(rendered, release(&mut cursor))
}

/// Render a query result cursor to an RD string.
///
/// Takes ownership of the cursor and releases it like
/// [`write_result_set`]. Returns `None` for an absent cursor.
pub fn format_result_set<C>(source: Option<C>, seps: &Separators) -> Result<Option<String>>
where
    C: ResultCursor,
{
    let Some(mut cursor) = source else {
        return Ok(None);
    };
    let mut buffer = String::new();
    let rendered = render_result_set(&mut cursor, seps, |chunk| {
        buffer.push_str(chunk);
        Ok(())
    });
    finish(rendered, release(&mut cursor))?;
    Ok(Some(buffer))
}

fn render_records<C, F>(cursor: &mut C, seps: &Separators, mut emit: F) -> Result<usize>
where
    C: RecordCursor + ?Sized,
    F: FnMut(&str) -> Result<()>,
{
    let columns = cursor.columns();
    cursor.reset();

    let mut row_count = 0;
    while cursor.next_row() {
        if row_count > 0 {
            emit(&seps.line)?;
        }
        row_count += 1;

        let values = columns
            .iter()
            .map(|column| cursor.value_of(column))
            .collect::<Result<Vec<_>>>()?;
        let row = row_string(
            values.into_iter().map(|v| v.and_then(|v| v.non_null())),
            &seps.column,
        );
        emit(&row)?;
    }

    debug!(rows = row_count, columns = columns.len(), "rendered record cursor");
    Ok(row_count)
}

fn render_result_set<C, F>(cursor: &mut C, seps: &Separators, mut emit: F) -> Result<usize>
where
    C: ResultCursor,
    F: FnMut(&str) -> Result<()>,
{
    let columns = resolve_columns(cursor)?;

    let mut row_count = 0;
    while cursor.advance()? {
        if row_count > 0 {
            emit(&seps.line)?;
        }
        row_count += 1;

        let cells = columns
            .iter()
            .map(|column| {
                if column.native {
                    cursor.native(&column.name).map(Cell::Native)
                } else {
                    cursor.text(&column.name).map(Cell::Text)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        let row = row_string(cells.iter().map(Cell::non_null), &seps.column);
        emit(&row)?;
    }

    debug!(rows = row_count, columns = columns.len(), "rendered result set");
    Ok(row_count)
}

/// Read column metadata once: upper-case the names and pick an accessor
/// per column. A repeated name keeps its first position.
fn resolve_columns<C: ResultCursor + ?Sized>(cursor: &C) -> Result<Vec<ResolvedColumn>> {
    let mut resolved: Vec<ResolvedColumn> = Vec::new();
    for meta in cursor.columns()? {
        let name = meta.name.to_uppercase();
        if resolved.iter().any(|c| c.name == name) {
            continue;
        }
        resolved.push(ResolvedColumn {
            name,
            native: is_native_type(&meta.type_name),
        });
    }
    debug!(?resolved, "resolved result set columns");
    Ok(resolved)
}

/// Close the cursor, then its statement. Both are always attempted.
fn release<C: ResultCursor + ?Sized>(cursor: &mut C) -> Result<()> {
    let cursor_closed = cursor.close();
    let statement_closed = cursor.close_statement();
    match (cursor_closed, statement_closed) {
        (Err(cursor_err), Err(statement_err)) => {
            warn!(error = %statement_err, "failed to close statement");
            Err(cursor_err)
        }
        (cursor_closed, statement_closed) => cursor_closed.and(statement_closed),
    }
}

/// Combine the rendering outcome with the release outcome. A rendering
/// error wins; release errors are only returned after a clean render.
fn finish(rendered: Result<usize>, released: Result<()>) -> Result<usize> {
    match (rendered, released) {
        (Ok(rows), Ok(())) => Ok(rows),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(release_err)) => {
            warn!(error = %release_err, "failed to release result set after render error");
            Err(err)
        }
    }
}
