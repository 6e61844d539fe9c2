//! # rdfmtlib
//!
//! Serializes tabular data into RD format, the flat delimited text read by
//! Report Designer style report tools.
//!
//! ## Format
//!
//! ```text
//! row    := col1 <colSep> col2 <colSep> ... colN <colSep>
//! output := row1 <lineSep> row2 <lineSep> ... rowM
//! ```
//!
//! Every value is followed by the column separator, the last one included.
//! Rows are joined by the line separator, with no trailing one. Null values
//! render as empty text. Separators default to `##` and `\n`; values are
//! never escaped, so a value containing a separator corrupts the output.
//!
//! ## Sources
//!
//! - **Record cursors** ([`RecordCursor`], [`RecordSet`]): materialized,
//!   rewindable records. Rendering rewinds the cursor first and never closes it.
//! - **Result cursors** ([`ResultCursor`], [`SqliteCursor`]): forward-only
//!   query results. Column names are upper-cased, numeric and raw columns
//!   are read natively and the rest as text. The renderer takes ownership
//!   and closes the cursor and then its statement, even on error.
//! - **Rows** ([`Row`]): a single ordered map or a slice of them.
//!
//! Cursor sources can be streamed to any [`std::io::Write`] sink (an HTTP
//! response body, a file, stdout) or collected into a string.
//!
//! ## Example
//!
//! ```rust
//! use rdfmtlib::{format_map, format_map_list, format_records, RecordSet, Row, Separators, Value};
//!
//! let rows: Vec<Row> = vec![
//!     Row::from([("NAME".to_string(), Value::from("Kim")), ("AGE".to_string(), Value::from(30))]),
//!     Row::from([("NAME".to_string(), Value::from("Lee")), ("AGE".to_string(), Value::Null)]),
//! ];
//! let rd = format_map_list(Some(rows.as_slice()), &Separators::default());
//! assert_eq!(rd.as_deref(), Some("Kim##30##\nLee####"));
//!
//! assert_eq!(format_map(Some(&rows[0]), "|").as_deref(), Some("Kim|30|"));
//!
//! let mut rs = RecordSet::new(["NAME", "AGE"]);
//! rs.push_row([Value::from("Kim"), Value::from(30)]).unwrap();
//! let rd = format_records(Some(&mut rs), &Separators::new("|", "!!")).unwrap();
//! assert_eq!(rd.as_deref(), Some("Kim|30|"));
//! ```

pub mod error;
pub mod options;
pub mod output;
pub mod source;
pub mod value;

pub use error::RdfmtError;
pub use options::{Separators, DEFAULT_COL_SEP, DEFAULT_LINE_SEP};
pub use output::{
    format_map, format_map_list, format_records, format_result_set, write_records,
    write_result_set,
};
pub use source::{ColumnMeta, RecordCursor, RecordSet, ResultCursor, SqliteCursor};
pub use value::{is_native_type, Cell, Value, NATIVE_TYPE_NAMES};

/// An ordered mapping from column name to value.
pub type Row = indexmap::IndexMap<String, Value>;

/// Result type for rdfmtlib operations
pub type Result<T> = std::result::Result<T, RdfmtError>;
