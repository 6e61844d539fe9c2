//! Cell values and the native/text typing of result set columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared column types whose values are read natively instead of being
/// coerced to text by the driver.
pub const NATIVE_TYPE_NAMES: [&str; 6] = [
    "LONG", "LONG RAW", "INTEGER", "FLOAT", "DOUBLE", "NUMBER",
];

/// A single column value in a row.
///
/// Deserializes untagged, so a JSON object maps straight onto a [`crate::Row`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL / JSON null / missing
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Real(f64),
    /// Text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl Value {
    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `None` for null, otherwise the value itself.
    pub fn non_null(&self) -> Option<&Value> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    /// Coerce the value to text the way a driver's string accessor would.
    ///
    /// Unlike [`Display`](fmt::Display), blobs are decoded as (lossy) UTF-8.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => f.write_str(s),
            Value::Blob(bytes) => {
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Blob(bytes)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// A result set cell, read either natively or as text depending on the
/// column's declared type.
///
/// Native cells keep the driver's typed value and are stringified only
/// when the row is written.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Typed value, stringified at render time
    Native(Value),
    /// Value already coerced to text by the source
    Text(Option<String>),
}

impl Cell {
    /// Check if the cell holds no value
    pub fn is_null(&self) -> bool {
        match self {
            Cell::Native(value) => value.is_null(),
            Cell::Text(text) => text.is_none(),
        }
    }

    /// `None` for a null cell, otherwise the cell itself.
    pub fn non_null(&self) -> Option<&Cell> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Native(value) => value.fmt(f),
            Cell::Text(Some(text)) => f.write_str(text),
            Cell::Text(None) => Ok(()),
        }
    }
}

/// Check whether a declared column type is read natively.
///
/// The type name is trimmed, upper-cased and stripped of any precision
/// suffix, so `number(10,2)` matches `NUMBER`.
pub fn is_native_type(type_name: &str) -> bool {
    let base = match type_name.find('(') {
        Some(idx) => &type_name[..idx],
        None => type_name,
    };
    let normalized = base.trim().to_ascii_uppercase();
    NATIVE_TYPE_NAMES.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from("Kim").to_string(), "Kim");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(vec![0x0a, 0xff]).to_string(), "0aff");
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(Value::Null.to_text(), None);
        assert_eq!(Value::from(42).to_text().as_deref(), Some("42"));
        assert_eq!(
            Value::from(b"raw".to_vec()).to_text().as_deref(),
            Some("raw")
        );
    }

    #[test]
    fn test_value_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_value_deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, true, 30, 2.5, "Lee"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Integer(30),
                Value::Real(2.5),
                Value::Text("Lee".to_string()),
            ]
        );
    }

    #[test]
    fn test_cell_null() {
        assert!(Cell::Native(Value::Null).is_null());
        assert!(Cell::Text(None).is_null());
        assert!(!Cell::Text(Some(String::new())).is_null());
        assert!(Cell::Text(None).non_null().is_none());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Native(Value::Integer(7)).to_string(), "7");
        assert_eq!(Cell::Text(Some("abc".to_string())).to_string(), "abc");
        assert_eq!(Cell::Text(None).to_string(), "");
    }

    #[test]
    fn test_native_types() {
        for name in NATIVE_TYPE_NAMES {
            assert!(is_native_type(name), "{name} should be native");
        }
        assert!(is_native_type("number(10,2)"));
        assert!(is_native_type(" Integer "));
        assert!(!is_native_type("VARCHAR2"));
        assert!(!is_native_type("TEXT"));
        assert!(!is_native_type(""));
        assert!(!is_native_type("BIGINT"));
    }
}
