//! Lenient field access for raw catalog records.
//!
//! Catalog exports disagree about the shape of multi-valued columns: the same
//! column may hold a native JSON array, a JSON-encoded array inside a string,
//! or a bare string. Every multi-valued read goes through
//! [`coerce_sequence`] so the fallback rules live in one place.
//!
//! # Examples
//! ```
//! use serde_json::json;
//! use etchant_core::field::coerce_sequence;
//!
//! assert_eq!(coerce_sequence(&json!(["a", "b"])), vec!["a", "b"]);
//! assert_eq!(coerce_sequence(&json!("[\"a\",\"b\"]")), vec!["a", "b"]);
//! assert_eq!(coerce_sequence(&json!("[broken")), vec!["[broken"]);
//! assert!(coerce_sequence(&json!(null)).is_empty());
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

/// Publication status that gates inclusion in a catalog.
pub const PUBLISHED_STATUS: &str = "published";

/// A raw catalog row keyed by column name.
///
/// Missing columns read as empty values; no accessor fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Construct an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Add a column while returning `self` for chaining.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Return the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Read a column as text, defaulting to an empty string.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(coerce_text).unwrap_or_default()
    }

    /// Read a column as text, returning `None` when it is blank.
    #[must_use]
    pub fn optional_text(&self, key: &str) -> Option<String> {
        let value = self.text(key);
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }

    /// Read a multi-valued column. See [`coerce_sequence`].
    #[must_use]
    pub fn sequence(&self, key: &str) -> Vec<String> {
        self.get(key).map(coerce_sequence).unwrap_or_default()
    }

    /// Read a boolean column. See [`coerce_flag`].
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(coerce_flag)
    }

    /// Read a non-negative integer column.
    #[must_use]
    pub fn unsigned(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(coerce_unsigned)
    }

    /// Read a signed integer column.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(number) => number.as_i64(),
            Value::String(raw) => raw.trim().parse().ok(),
            _ => None,
        }
    }

    /// Report whether the record's `status` column admits it to a catalog.
    #[must_use]
    pub fn is_published(&self) -> bool {
        status_is_published(self.optional_text("status").as_deref())
    }

    /// Iterate over column names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<serde_json::Map<String, Value>> for Record {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Report whether a publication status admits a record.
///
/// An absent or blank status counts as published.
#[must_use]
pub fn status_is_published(status: Option<&str>) -> bool {
    status.map_or(true, |value| {
        let trimmed = value.trim();
        trimmed.is_empty() || trimmed.eq_ignore_ascii_case(PUBLISHED_STATUS)
    })
}

/// Coerce a value into a sequence of strings.
///
/// - arrays keep their scalar members (blank strings are dropped);
/// - strings that hold a JSON array are decoded;
/// - any other non-blank string becomes a single-element sequence;
/// - `null` and blank strings become an empty sequence.
#[must_use]
pub fn coerce_sequence(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(raw) => sequence_from_str(raw),
        other => scalar_text(other).into_iter().collect(),
    }
}

fn sequence_from_str(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            return items.iter().filter_map(scalar_text).collect();
        }
    }
    vec![trimmed.to_owned()]
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a value into free text.
///
/// Arrays are joined with `", "` so list-shaped descriptive columns still read
/// naturally.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(_) => coerce_sequence(value).join(", "),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(_) => value.to_string(),
    }
}

/// Coerce a value into a boolean.
///
/// Strings `true`, `t`, `yes`, `y` and `1` (any case) are truthy, as is any
/// non-zero number.
#[must_use]
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "true" | "t" | "yes" | "y" | "1"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn coerce_unsigned(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}
