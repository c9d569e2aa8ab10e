//! Conversions between SQLite cells and JSON values, in both directions.
//!
//! The closed [`serde_json::Value`] variant is the currency of the whole
//! pipeline, so every match here is exhaustive over the five storage classes
//! SQLite can hand back and the six shapes JSON can hold.

// used to reach into result cells without copying
use rusqlite::types::ValueRef;
use serde_json::{Number, Value};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{Result, SqlJsonError};

/// Converts one result cell into its JSON form.
///
/// NULL, INTEGER and TEXT map directly; SQLite integers are `i64` and a JSON
/// number holds the full signed 64-bit range exactly, so nothing can be
/// truncated on this path. A REAL must be finite, since JSON has no spelling
/// for infinities or NaN. A BLOB becomes standard base64 text (RFC 4648
/// alphabet, with padding) because JSON has no binary type.
pub fn column_to_json(column: &str, cell: ValueRef) -> Result<Value> {
    match cell {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(i) => Ok(Value::Number(Number::from(i))),
        ValueRef::Real(r) => match Number::from_f64(r) {
            Some(n) => Ok(Value::Number(n)),
            None => Err(SqlJsonError::Value {
                name: column.to_string(),
                message: format!("non-finite number {r} has no JSON representation"),
            }),
        },
        ValueRef::Text(t) => match std::str::from_utf8(t) {
            Ok(s) => Ok(Value::String(s.to_string())),
            Err(e) => Err(SqlJsonError::Value {
                name: column.to_string(),
                message: format!("text is not valid UTF-8: {e}"),
            }),
        },
        ValueRef::Blob(b) => Ok(Value::String(BASE64.encode(b))),
    }
}

/// Converts one binding into the value bound to a statement parameter.
///
/// Numbers become INTEGER when they carry no fractional or exponent
/// component and REAL otherwise; a magnitude beyond what a signed 64-bit
/// integer holds is refused rather than truncated. Arrays and objects have
/// no scalar form and are refused by name.
pub fn json_to_sql(name: &str, value: &Value) -> Result<rusqlite::types::Value> {
    use rusqlite::types::Value as SqlValue;
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Integer(*b as i64)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Integer(i))
            } else if n.is_u64() {
                Err(SqlJsonError::Value {
                    name: name.to_string(),
                    message: format!("integer {n} does not fit a signed 64-bit column"),
                })
            } else if let Some(f) = n.as_f64() {
                Ok(SqlValue::Real(f))
            } else {
                Err(SqlJsonError::Value {
                    name: name.to_string(),
                    message: format!("number {n} has no bindable form"),
                })
            }
        }
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(SqlJsonError::Value {
            name: name.to_string(),
            message: format!("a JSON {} cannot be bound as a scalar parameter", kind(value)),
        }),
    }
}

/// Short name of a JSON value's shape, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
