//! Data sources: the shapes of input the renderer can drain.
//!
//! - **RecordCursor**: materialized, rewindable records (caller keeps ownership)
//! - **ResultCursor**: forward-only query results with column metadata
//!   (the renderer takes ownership and releases them)
//! - **SqliteCursor**: a `ResultCursor` over `rusqlite` rows

pub mod record;
pub mod result;
pub mod sqlite;

pub use record::{RecordCursor, RecordSet};
pub use result::{ColumnMeta, ResultCursor};
pub use sqlite::SqliteCursor;

/// Case-insensitive column name match.
///
/// Uses full Unicode upper-casing, the same rule the renderer applies to
/// result set metadata, so `café` answers to `CAFÉ` and `straße` to `STRASSE`.
pub(crate) fn column_matches(name: &str, requested: &str) -> bool {
    name.eq_ignore_ascii_case(requested) || name.to_uppercase() == requested.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_matches() {
        assert!(column_matches("id", "ID"));
        assert!(column_matches("café", "CAFÉ"));
        assert!(column_matches("straße", "STRASSE"));
        assert!(!column_matches("id", "NAME"));
    }
}
