// Read-only tree browsing over a loaded document.
// - RFC 6901 JSON Pointer addressing (`/screenSize/width`, `/levels/0`).
// - `list_children` for walking a node without knowing its keys up front.
use crate::error::{Error, Result};
use crate::value::{JsonKind, JsonValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildInfo {
    pub key_or_index: String,
    pub kind: JsonKind,
    pub len: Option<usize>,
}

fn unescape_token(tok: &str) -> String {
    let s = tok.replace("~1", "/");
    s.replace("~0", "~")
}

pub fn get_by_pointer<'a>(root: &'a JsonValue, pointer: &str) -> Result<&'a JsonValue> {
    if pointer.is_empty() {
        return Ok(root);
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(Error::key_not_found(pointer));
    };
    let mut cur = root;
    for raw in rest.split('/') {
        let tok = unescape_token(raw);
        cur = match cur {
            JsonValue::Object(map) => map.get(&tok).ok_or_else(|| Error::key_not_found(&tok))?,
            JsonValue::Array(items) => tok
                .parse::<usize>()
                .ok()
                // digits only, no leading zero ("+1" and "01" are rejected)
                .filter(|_| {
                    tok.bytes().all(|b| b.is_ascii_digit())
                        && (tok == "0" || !tok.starts_with('0'))
                })
                .and_then(|i| items.get(i))
                .ok_or_else(|| Error::key_not_found(&tok))?,
            other => {
                return Err(Error::NotAnObject {
                    found: other.kind(),
                });
            }
        };
    }
    Ok(cur)
}

pub fn list_children(node: &JsonValue) -> Vec<ChildInfo> {
    match node {
        JsonValue::Object(map) => map
            .iter()
            .map(|(k, v)| ChildInfo {
                key_or_index: k.clone(),
                kind: v.kind(),
                len: v.len(),
            })
            .collect(),
        JsonValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| ChildInfo {
                key_or_index: i.to_string(),
                kind: v.kind(),
                len: v.len(),
            })
            .collect(),
        _ => Vec::new(),
    }
}
