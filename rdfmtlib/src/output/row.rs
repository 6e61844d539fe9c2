//! Row-string construction shared by every render path.

use std::fmt::Display;

/// Append one RD row to `buf`.
///
/// Each value is followed by `col_sep`, the last one included. Absent
/// values contribute nothing but their separator.
pub(crate) fn push_row<I, T>(buf: &mut String, values: I, col_sep: &str)
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    for value in values {
        if let Some(value) = value {
            buf.push_str(&value.to_string());
        }
        buf.push_str(col_sep);
    }
}

/// Build one RD row as a new string.
pub(crate) fn row_string<I, T>(values: I, col_sep: &str) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    let mut buf = String::new();
    push_row(&mut buf, values, col_sep);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_string_trailing_separator() {
        assert_eq!(row_string([Some("x"), Some("y")], "|"), "x|y|");
    }

    #[test]
    fn test_row_string_absent_values() {
        assert_eq!(row_string([Some("Lee"), None], "##"), "Lee####");
        assert_eq!(row_string([None::<&str>, None], "##"), "####");
    }

    #[test]
    fn test_row_string_no_columns() {
        assert_eq!(row_string(Vec::<Option<&str>>::new(), "##"), "");
    }

    #[test]
    fn test_row_string_separator_count() {
        let row = row_string([Some("a"), None, Some("c"), Some("d")], "::");
        assert_eq!(row.matches("::").count(), 4);
    }

    #[test]
    fn test_row_string_splits_back_into_values() {
        let values = ["alpha", "", "gamma"];
        let row = row_string(values.iter().map(Some), "##");
        let mut parts: Vec<&str> = row.split("##").collect();
        assert_eq!(parts.pop(), Some(""));
        assert_eq!(parts, values);
    }

    #[test]
    fn test_push_row_appends() {
        let mut buf = String::from("head:");
        push_row(&mut buf, [Some(1), Some(2)], ",");
        assert_eq!(buf, "head:1,2,");
    }
}
