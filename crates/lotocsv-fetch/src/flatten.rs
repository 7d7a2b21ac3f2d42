//! Flattening of nested JSON results.

use lotocsv_types::FlatRecord;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while flattening a result body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// The top-level value was neither an object nor an array.
    #[error("expected an object or array at the top level, found {found}")]
    NotAContainer {
        /// JSON type name of the encountered value.
        found: &'static str,
    },
}

/// Flattens a nested JSON value into a single-level record.
///
/// Object keys and array indices become path segments joined by `.`,
/// with no delimiter before the first segment. Every scalar leaf of
/// the input appears exactly once in the output, under the path that
/// encodes its location:
///
/// ```
/// use lotocsv_fetch::flatten;
/// use serde_json::json;
///
/// let record = flatten(&json!({"numero": 100, "dezenas": ["01", "02"]})).unwrap();
/// assert_eq!(record.get("numero"), Some(&json!(100)));
/// assert_eq!(record.get("dezenas.0"), Some(&json!("01")));
/// assert_eq!(record.get("dezenas.1"), Some(&json!("02")));
/// ```
///
/// A fresh record is allocated on every call; nothing is shared
/// between invocations.
///
/// # Errors
///
/// Returns an error if `value` is neither an object nor an array.
pub fn flatten(value: &Value) -> Result<FlatRecord, FlattenError> {
    if !value.is_object() && !value.is_array() {
        return Err(FlattenError::NotAContainer {
            found: json_type_name(value),
        });
    }

    let mut record = FlatRecord::new();
    flatten_into(value, "", "", &mut record);
    Ok(record)
}

/// Walks one container level, joining child keys onto the running prefix.
///
/// The delimiter is empty for the top-level call and `.` below it, so
/// the first path segment never carries a leading dot.
fn flatten_into(value: &Value, prefix: &str, delimiter: &str, out: &mut FlatRecord) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                descend(child, format!("{prefix}{delimiter}{key}"), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                descend(child, format!("{prefix}{delimiter}{index}"), out);
            }
        }
        // Callers only pass containers down.
        _ => {}
    }
}

fn descend(child: &Value, path: String, out: &mut FlatRecord) {
    if child.is_object() || child.is_array() {
        flatten_into(child, &path, ".", out);
    } else {
        out.insert(path, child.clone());
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
