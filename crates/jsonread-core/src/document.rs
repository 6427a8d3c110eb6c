use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::access;
use crate::error::{Error, Result};
use crate::value::JsonValue;

/// Where a document was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Text,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Text => f.write_str("<in-memory>"),
        }
    }
}

/// A parsed JSON document. Keeps no handle on its source once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: JsonValue,
    source: Source,
}

impl Document {
    pub fn root(&self) -> &JsonValue {
        &self.root
    }
    pub fn source(&self) -> &Source {
        &self.source
    }
    pub fn into_root(self) -> JsonValue {
        self.root
    }

    pub fn read_string(&self, key: &str) -> Result<&str> {
        access::read_string(&self.root, key)
    }
    pub fn read_number_as_int(&self, key: &str) -> Result<i64> {
        access::read_number_as_int(&self.root, key)
    }
    pub fn read_number(&self, key: &str) -> Result<f64> {
        access::read_number(&self.root, key)
    }
    pub fn read_bool(&self, key: &str) -> Result<bool> {
        access::read_bool(&self.root, key)
    }
    pub fn read_object(&self, key: &str) -> Result<&JsonValue> {
        access::read_object(&self.root, key)
    }
    pub fn read_array(&self, key: &str) -> Result<&[JsonValue]> {
        access::read_array(&self.root, key)
    }
    pub fn read_array_of_string(&self, key: &str) -> Result<Vec<String>> {
        access::read_array_of_string(&self.root, key)
    }
    pub fn read_value(&self, key: &str) -> Result<&JsonValue> {
        access::read_value(&self.root, key)
    }
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&data, Source::File(path.to_path_buf()))
}

pub fn load_from_text(text: &str) -> Result<Document> {
    parse(text.as_bytes(), Source::Text)
}

/// Like [`load_from_text`] for a raw buffer; invalid UTF-8 is a parse error.
pub fn load_from_slice(data: &[u8]) -> Result<Document> {
    parse(data, Source::Text)
}

fn parse(data: &[u8], source: Source) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_slice(data).map_err(|e| {
        debug!("parse of {} failed: {}", source, e);
        Error::from(e)
    })?;
    let root = JsonValue::from(value);
    debug!(
        "loaded {} ({} bytes, root {})",
        source,
        data.len(),
        root.kind()
    );
    Ok(Document { root, source })
}
