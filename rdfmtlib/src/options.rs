//! Separator configuration for RD output.
//!
//! RD data is a flat text format: every column value is followed by a
//! column separator, and rows are joined by a line separator. Both are
//! plain strings chosen per call.

use serde::{Deserialize, Serialize};

/// Default column separator
pub const DEFAULT_COL_SEP: &str = "##";

/// Default line (row) separator
pub const DEFAULT_LINE_SEP: &str = "\n";

/// Column and line separators used when rendering RD output.
///
/// Values are written verbatim: a value that contains either separator
/// corrupts the output. The report tool controls its own data, so no
/// escaping is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Written after every column value, including the last one
    pub column: String,
    /// Written between rows
    pub line: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            column: DEFAULT_COL_SEP.to_string(),
            line: DEFAULT_LINE_SEP.to_string(),
        }
    }
}

impl Separators {
    /// Create a separator pair
    pub fn new(column: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            line: line.into(),
        }
    }

    /// Builder: set the column separator
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Builder: set the line separator
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_default() {
        let seps = Separators::default();
        assert_eq!(seps.column, "##");
        assert_eq!(seps.line, "\n");
    }

    #[test]
    fn test_separators_builder() {
        let seps = Separators::default().with_column("|").with_line("!!");
        assert_eq!(seps, Separators::new("|", "!!"));
    }

    #[test]
    fn test_separators_builder_keeps_other_field() {
        let seps = Separators::default().with_line("\r\n");
        assert_eq!(seps.column, DEFAULT_COL_SEP);
        assert_eq!(seps.line, "\r\n");
    }
}
