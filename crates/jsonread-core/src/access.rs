// Typed reads by key.
// Every reader takes a node that must be an object and either returns the
// coerced value or one of NotAnObject / KeyNotFound / TypeMismatch, checked
// in that order. Nothing is defaulted.
use log::trace;

use crate::error::{Error, Result};
use crate::value::{JsonKind, JsonValue};

/// Untyped member lookup.
pub fn read_value<'a>(node: &'a JsonValue, key: &str) -> Result<&'a JsonValue> {
    let map = match node {
        JsonValue::Object(map) => map,
        other => {
            trace!("read {:?} on {}", key, other.kind());
            return Err(Error::NotAnObject {
                found: other.kind(),
            });
        }
    };
    map.get(key).ok_or_else(|| {
        trace!("read {:?}: missing", key);
        Error::key_not_found(key)
    })
}

fn mismatch(key: &str, expected: JsonKind, found: &JsonValue) -> Error {
    trace!("read {:?}: expected {}, found {}", key, expected, found.kind());
    Error::mismatch(key, expected, found.kind())
}

pub fn read_string<'a>(node: &'a JsonValue, key: &str) -> Result<&'a str> {
    match read_value(node, key)? {
        JsonValue::String(s) => Ok(s),
        other => Err(mismatch(key, JsonKind::String, other)),
    }
}

pub fn read_number(node: &JsonValue, key: &str) -> Result<f64> {
    match read_value(node, key)? {
        JsonValue::Number(n) => Ok(*n),
        other => Err(mismatch(key, JsonKind::Number, other)),
    }
}

/// Reads a number and truncates it toward zero. Out-of-range values saturate.
pub fn read_number_as_int(node: &JsonValue, key: &str) -> Result<i64> {
    read_number(node, key).map(|n| n.trunc() as i64)
}

pub fn read_bool(node: &JsonValue, key: &str) -> Result<bool> {
    match read_value(node, key)? {
        JsonValue::Bool(b) => Ok(*b),
        other => Err(mismatch(key, JsonKind::Bool, other)),
    }
}

/// Borrows a nested object; the result is itself a valid node for any reader.
pub fn read_object<'a>(node: &'a JsonValue, key: &str) -> Result<&'a JsonValue> {
    let value = read_value(node, key)?;
    match value {
        JsonValue::Object(_) => Ok(value),
        other => Err(mismatch(key, JsonKind::Object, other)),
    }
}

pub fn read_array<'a>(node: &'a JsonValue, key: &str) -> Result<&'a [JsonValue]> {
    match read_value(node, key)? {
        JsonValue::Array(items) => Ok(items),
        other => Err(mismatch(key, JsonKind::Array, other)),
    }
}

/// Collects a homogeneous string array in order. A single non-string element
/// fails the whole read.
pub fn read_array_of_string(node: &JsonValue, key: &str) -> Result<Vec<String>> {
    let items = read_array(node, key)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            JsonValue::String(s) => out.push(s.clone()),
            other => {
                trace!("read {:?}[{}]: found {}", key, i, other.kind());
                return Err(Error::TypeMismatch {
                    key: key.to_string(),
                    expected: JsonKind::String,
                    found: other.kind(),
                    index: Some(i),
                });
            }
        }
    }
    Ok(out)
}
