//! Builds the final binding map from an ordered sequence of sources.

use serde_json::{Map, Value};

use crate::error::{Result, SqlJsonError};

/// One chunk of JSON text contributing named bindings, labelled with its
/// origin (typically a file path) so failures can name the offender.
#[derive(Debug, Clone)]
pub struct BindingSource {
    pub origin: String,
    pub text: String,
}

impl BindingSource {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self { origin: origin.into(), text: text.into() }
    }
}

/// Merges the sources into one binding map.
///
/// Sources are processed in the given order, lowest priority first; every
/// key/value pair overwrites any earlier entry for the same key. Each source
/// must be a JSON object whose values are all scalars. The build is atomic:
/// one bad source rejects the whole invocation and nothing partial escapes.
pub fn build(sources: &[BindingSource]) -> Result<Map<String, Value>> {
    let mut bindings = Map::new();
    for source in sources {
        let parsed: Value = serde_json::from_str(&source.text).map_err(|e| {
            SqlJsonError::BindDeserialize { origin: source.origin.clone(), message: e.to_string() }
        })?;
        let object = match parsed {
            Value::Object(object) => object,
            other => {
                return Err(SqlJsonError::BindDeserialize {
                    origin: source.origin.clone(),
                    message: format!("expected a JSON object, got a JSON {}", crate::value::kind(&other)),
                });
            }
        };
        for (name, value) in object {
            if value.is_array() || value.is_object() {
                return Err(SqlJsonError::BindDeserialize {
                    origin: source.origin.clone(),
                    message: format!("binding '{name}' is not a scalar"),
                });
            }
            bindings.insert(name, value);
        }
    }
    Ok(bindings)
}
