/// Field values and records
///
/// A record is an open-ended mapping from field name to a [`FieldValue`].
/// The store never requires a field to exist; columns simply read whatever
/// is there and treat a missing field like an empty string.
///
/// # Examples
///
/// ```
/// use tablestore::{record, FieldValue};
///
/// let row = record([("name", FieldValue::from("Alice")), ("age", FieldValue::from(30))]);
/// assert_eq!(row.get("age").unwrap().sort_text(), "30");
/// ```

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A record handed to the store. Keys are field names.
pub type Record = HashMap<String, FieldValue>;

/// Value held by a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The text this value is collated by.
    ///
    /// Numbers print the way JavaScript's `String()` does: integral values
    /// without a fractional part (`14.0` sorts as `"14"`), and magnitudes of
    /// at least `1e21` or below `1e-6` in exponent form (`"1e+21"`, `"1e-7"`).
    /// Null gives the empty string.
    pub fn sort_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::String(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        format!("{}", n)
    }
}

/// Sort text of `record[key]`, empty when the field is absent.
pub fn field_sort_text(record: &Record, key: &str) -> String {
    record.get(key).map(FieldValue::sort_text).unwrap_or_default()
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Build a record from `(field, value)` pairs.
pub fn record<K, I>(fields: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldValue)>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Parse a JSON array of objects into records.
///
/// Nested arrays or objects are rejected; fields must be scalars.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, TableError> {
    Ok(serde_json::from_str(json)?)
}
