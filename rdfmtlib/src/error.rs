//! Error types for rdfmtlib

use thiserror::Error;

/// Errors that can occur while rendering RD output
#[derive(Error, Debug)]
pub enum RdfmtError {
    /// A record cursor has no value accessor for the requested column
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    /// A record set row does not match the record set's column list
    #[error("row has {actual} values but the record set has {expected} columns")]
    RowShape { expected: usize, actual: usize },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite driver error
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Error raised by a third-party cursor implementation
    #[error("data source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RdfmtError {
    /// Shorthand for a missing column.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        RdfmtError::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Wrap an arbitrary data source error.
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RdfmtError::Source(err.into())
    }
}
