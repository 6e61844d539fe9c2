//! Rendering: turn rows into RD text.
//!
//! Every path shares one row primitive: each column value followed by the
//! column separator, the last one included.
//!
//! - **cursor**: record cursors and query results, streamed to a sink or
//!   collected into a string; the line separator joins rows
//! - **collection**: a single [`Row`](crate::Row) or a slice of rows

pub mod collection;
pub mod cursor;
mod row;

pub use collection::{format_map, format_map_list};
pub use cursor::{format_records, format_result_set, write_records, write_result_set};
