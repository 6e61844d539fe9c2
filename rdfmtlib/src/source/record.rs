//! In-memory record cursors.
//!
//! A record cursor is fully materialized and can be rewound, so the same
//! source can be rendered any number of times. The renderer never closes
//! it; the caller keeps ownership.

use super::column_matches;
use crate::error::RdfmtError;
use crate::value::Value;
use crate::Result;

/// A forward-only, re-seekable cursor over materialized records.
pub trait RecordCursor {
    /// Ordered column names.
    fn columns(&self) -> Vec<String>;

    /// Move back to before the first row.
    fn reset(&mut self);

    /// Advance to the next row. Returns `false` once past the last row.
    fn next_row(&mut self) -> bool;

    /// Value of a column on the current row.
    ///
    /// `Ok(None)` when the cursor is not positioned on a row. Fails with
    /// [`RdfmtError::ColumnNotFound`] when the name is unknown.
    fn value_of(&self, column: &str) -> Result<Option<&Value>>;
}

/// A materialized table with a cursor position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    /// Zero means "before the first row", `n` means row `n - 1`.
    position: usize,
}

impl RecordSet {
    /// Create an empty record set with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            position: 0,
        }
    }

    /// Append a row. Values are matched to columns by position.
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Vec<Value> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(RdfmtError::RowShape {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder form of [`push_row`](Self::push_row).
    pub fn with_row<I, V>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_row(values)?;
        Ok(self)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the record set has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| column_matches(c, column))
    }
}

impl RecordCursor for RecordSet {
    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn reset(&mut self) {
        self.position = 0;
    }

    fn next_row(&mut self) -> bool {
        if self.position < self.rows.len() {
            self.position += 1;
            true
        } else {
            // Park past the end so repeated calls keep returning false.
            self.position = self.rows.len() + 1;
            false
        }
    }

    fn value_of(&self, column: &str) -> Result<Option<&Value>> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| RdfmtError::column_not_found(column))?;
        let row = match self.position {
            0 => None,
            n => self.rows.get(n - 1),
        };
        Ok(row.map(|values| &values[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> RecordSet {
        RecordSet::new(["NAME", "AGE"])
            .with_row([Value::from("Kim"), Value::from(30)])
            .unwrap()
            .with_row([Value::from("Lee"), Value::Null])
            .unwrap()
    }

    #[test]
    fn test_record_set_iteration() {
        let mut rs = people();
        assert_eq!(rs.len(), 2);
        assert!(rs.next_row());
        assert_eq!(rs.value_of("NAME").unwrap(), Some(&Value::from("Kim")));
        assert!(rs.next_row());
        assert_eq!(rs.value_of("AGE").unwrap(), Some(&Value::Null));
        assert!(!rs.next_row());
        assert!(!rs.next_row());
        assert_eq!(rs.value_of("NAME").unwrap(), None);
    }

    #[test]
    fn test_record_set_reset() {
        let mut rs = people();
        while rs.next_row() {}
        rs.reset();
        assert!(rs.next_row());
        assert_eq!(rs.value_of("name").unwrap(), Some(&Value::from("Kim")));
    }

    #[test]
    fn test_record_set_before_first_row() {
        let rs = people();
        assert_eq!(rs.value_of("NAME").unwrap(), None);
    }

    #[test]
    fn test_record_set_column_not_found() {
        let mut rs = people();
        rs.next_row();
        let err = rs.value_of("EMAIL").unwrap_err();
        assert!(matches!(err, RdfmtError::ColumnNotFound { ref column } if column == "EMAIL"));
    }

    #[test]
    fn test_record_set_row_shape() {
        let mut rs = RecordSet::new(["A", "B"]);
        let err = rs.push_row([Value::from("only one")]).unwrap_err();
        assert!(matches!(
            err,
            RdfmtError::RowShape {
                expected: 2,
                actual: 1
            }
        ));
        assert!(rs.is_empty());
    }
}
