//! Decides the final document structure for the result set.

use serde_json::{Map, Value};

use crate::error::{Result, SqlJsonError};
use crate::query::Row;
use crate::value;

/// Resolves the output shape: a bare array of rows, a fresh `{key: rows}`
/// object, or an existing document with the field `key` replaced by the rows.
///
/// The existing-document cases take precedence over the key-only case, and a
/// document without a key (or a non-object document) is refused. Pure: the
/// caller's document is consumed and a new value returned, nothing is edited
/// in place behind the caller's back.
pub fn shape(records: Vec<Row>, existing: Option<Value>, key: Option<&str>) -> Result<Value> {
    let records = Value::Array(records.into_iter().map(Value::Object).collect());
    match (existing, key) {
        (Some(Value::Object(mut document)), Some(key)) => {
            document.insert(key.to_string(), records);
            Ok(Value::Object(document))
        }
        (Some(other), Some(_)) => Err(SqlJsonError::InputFormat(format!(
            "cannot attach a field to a JSON {}",
            value::kind(&other)
        ))),
        (Some(_), None) => Err(SqlJsonError::KeyMissing),
        (None, Some(key)) => {
            let mut document = Map::new();
            document.insert(key.to_string(), records);
            Ok(Value::Object(document))
        }
        (None, None) => Ok(records),
    }
}
