//! [`ResultCursor`] implementation backed by `rusqlite`.

use rusqlite::types::ValueRef;
use rusqlite::{Params, Rows, Statement};

use super::column_matches;
use super::result::{ColumnMeta, ResultCursor};
use crate::error::RdfmtError;
use crate::value::Value;
use crate::Result;

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        }
    }
}

/// Result cursor over the rows of a prepared SQLite statement.
///
/// The statement stays owned by the caller and is finalized when the
/// caller drops it; closing the cursor resets it.
///
/// ```rust
/// use rdfmtlib::{format_result_set, Separators, SqliteCursor};
/// use rusqlite::Connection;
///
/// let conn = Connection::open_in_memory().unwrap();
/// conn.execute_batch(
///     "CREATE TABLE person (name TEXT, age INTEGER);
///      INSERT INTO person VALUES ('Kim', 30), ('Lee', NULL);",
/// )
/// .unwrap();
///
/// let mut stmt = conn.prepare("SELECT name, age FROM person").unwrap();
/// let cursor = SqliteCursor::query(&mut stmt, []).unwrap();
/// let rd = format_result_set(Some(cursor), &Separators::default()).unwrap();
/// assert_eq!(rd.as_deref(), Some("Kim##30##\nLee####"));
/// ```
pub struct SqliteCursor<'stmt> {
    rows: Option<Rows<'stmt>>,
    columns: Vec<ColumnMeta>,
    current: Vec<Value>,
}

impl<'stmt> SqliteCursor<'stmt> {
    /// Run `stmt` with `params` and wrap its rows.
    pub fn query<P: Params>(stmt: &'stmt mut Statement<'_>, params: P) -> Result<Self> {
        let columns = stmt
            .columns()
            .iter()
            .map(|c| ColumnMeta::new(c.name(), c.decl_type().unwrap_or_default()))
            .collect();
        let rows = stmt.query(params)?;
        Ok(Self {
            rows: Some(rows),
            columns,
            current: Vec::new(),
        })
    }

    fn current_value(&self, column: &str) -> Result<&Value> {
        let idx = self
            .columns
            .iter()
            .position(|c| column_matches(&c.name, column))
            .ok_or_else(|| RdfmtError::column_not_found(column))?;
        Ok(self.current.get(idx).unwrap_or(&Value::Null))
    }
}

impl ResultCursor for SqliteCursor<'_> {
    fn columns(&self) -> Result<Vec<ColumnMeta>> {
        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> Result<bool> {
        let Some(rows) = self.rows.as_mut() else {
            return Ok(false);
        };
        match rows.next()? {
            Some(row) => {
                self.current = (0..self.columns.len())
                    .map(|idx| row.get_ref(idx).map(Value::from))
                    .collect::<rusqlite::Result<_>>()?;
                Ok(true)
            }
            None => {
                self.current.clear();
                Ok(false)
            }
        }
    }

    fn native(&self, column: &str) -> Result<Value> {
        self.current_value(column).cloned()
    }

    fn text(&self, column: &str) -> Result<Option<String>> {
        Ok(self.current_value(column)?.to_text())
    }

    fn close(&mut self) -> Result<()> {
        self.rows = None;
        self.current.clear();
        Ok(())
    }

    fn close_statement(&mut self) -> Result<()> {
        // Borrowed statement: its owner finalizes it on drop.
        Ok(())
    }
}
