// In-memory JSON value model.
// Produced once from serde_json output and never mutated afterwards; all
// readers hand out borrows into the tree owned by a `Document`.
use core::fmt;

use indexmap::IndexMap;

/// Object members in document order.
pub type Map = IndexMap<String, JsonValue>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    /// JSON has a single numeric type; integers and fractions both land here.
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Map),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Number of members or elements; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(items) => Some(items.len()),
            JsonValue::Object(map) => Some(map.len()),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            // Without arbitrary_precision every serde_json number has an f64 view.
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(members) => JsonValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Number(n) => number_to_json(*n),
            JsonValue::String(s) => serde_json::Value::String(s.clone()),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

// Whole numbers print without a trailing `.0`.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return serde_json::Value::Number((n as i64).into());
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), JsonKind::Null; "null")]
    #[test_case(json!(false), JsonKind::Bool; "bool")]
    #[test_case(json!(800), JsonKind::Number; "integer")]
    #[test_case(json!(-1.5), JsonKind::Number; "float")]
    #[test_case(json!("level1"), JsonKind::String; "string")]
    #[test_case(json!(["a", 1]), JsonKind::Array; "array")]
    #[test_case(json!({"width": 800}), JsonKind::Object; "object")]
    fn test_kind_after_conversion(value: serde_json::Value, expected: JsonKind) {
        assert_eq!(JsonValue::from(value).kind(), expected);
    }

    #[test]
    fn test_object_keeps_document_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let converted = JsonValue::from(value);
        let keys: Vec<&str> = converted
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_back_to_serde_json() {
        let original = json!({"gameTitle": "My New Game", "numPlayers": 1, "ratio": 1.5, "levels": ["a"]});
        let converted = JsonValue::from(original.clone());
        assert_eq!(serde_json::Value::from(&converted), original);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(JsonKind::Bool.to_string(), "boolean");
        assert_eq!(JsonKind::Object.to_string(), "object");
    }

    #[test]
    fn test_len() {
        assert_eq!(JsonValue::from(json!([1, 2, 3])).len(), Some(3));
        assert_eq!(JsonValue::from(json!({"a": 1})).len(), Some(1));
        assert_eq!(JsonValue::from(json!("abc")).len(), None);
    }
}
