//! SQL-style result cursors.
//!
//! A result cursor is forward-only and single-use. The renderer takes it
//! by value, drains it once and then releases both the cursor and the
//! statement that produced it.

use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::Result;

/// Column metadata reported by a result cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name as reported by the driver
    pub name: String,
    /// Declared type name (empty when the driver has none)
    pub type_name: String,
}

impl ColumnMeta {
    /// Create column metadata
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A forward-only cursor over query results.
///
/// Column lookups by name must be case-insensitive under Unicode
/// upper-casing: the renderer asks for names passed through
/// [`str::to_uppercase`].
pub trait ResultCursor {
    /// Column metadata, in select-list order.
    fn columns(&self) -> Result<Vec<ColumnMeta>>;

    /// Advance to the next row. Returns `false` once the results are exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Current row's value for `column`, as the driver's native type.
    fn native(&self, column: &str) -> Result<Value>;

    /// Current row's value for `column`, coerced to text by the driver.
    fn text(&self, column: &str) -> Result<Option<String>>;

    /// Release the cursor.
    fn close(&mut self) -> Result<()>;

    /// Release the statement that produced the cursor.
    fn close_statement(&mut self) -> Result<()>;
}
