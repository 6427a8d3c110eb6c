use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::value::JsonKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a load or a typed read can fail with.
#[derive(Debug)]
pub enum Error {
    /// The source file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The text is not well-formed JSON. `line` and `column` are 1-based.
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    /// A keyed read was attempted on something other than an object.
    NotAnObject { found: JsonKind },
    KeyNotFound { key: String },
    /// The key exists but holds the wrong kind of value. `index` points at the
    /// offending element when an array read rejects one of its items.
    TypeMismatch {
        key: String,
        expected: JsonKind,
        found: JsonKind,
        index: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    NotAnObject,
    KeyNotFound,
    TypeMismatch,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::NotAnObject { .. } => ErrorKind::NotAnObject,
            Error::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// True for failures of a typed read, as opposed to loading.
    pub fn is_read_error(&self) -> bool {
        !matches!(self, Error::Io { .. } | Error::Parse { .. })
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn mismatch(key: &str, expected: JsonKind, found: JsonKind) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
            index: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let message = e.to_string();
        // serde_json appends " at line L column C"; keep only the description.
        let message = match message.rfind(" at line ") {
            Some(pos) => message[..pos].to_string(),
            None => message,
        };
        Error::Parse {
            line: e.line().max(1),
            column: e.column(),
            message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            Error::Parse {
                line,
                column,
                message,
            } => write!(f, "invalid JSON at line {line} column {column}: {message}"),
            Error::NotAnObject { found } => {
                write!(f, "expected an object to read keys from, found {found}")
            }
            Error::KeyNotFound { key } => write!(f, "key not found: {key:?}"),
            Error::TypeMismatch {
                key,
                expected,
                found,
                index: Some(i),
            } => write!(
                f,
                "type mismatch for {key:?}[{i}]: expected {expected}, found {found}"
            ),
            Error::TypeMismatch {
                key,
                expected,
                found,
                index: None,
            } => write!(
                f,
                "type mismatch for {key:?}: expected {expected}, found {found}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
