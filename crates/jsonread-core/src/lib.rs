//! jsonread-core: typed, read-only access to JSON documents
//!
//! Built for game configuration, level lists and save data:
//! - Load a document from a file or in-memory text (`load_from_file`, `load_from_text`)
//! - Read scalars, arrays and nested objects by key with strict type checks
//! - Browse by JSON Pointer and list children for tooling
//!
//! ```
//! let doc = jsonread_core::load_from_text(
//!     r#"{"gameTitle":"My New Game","screenSize":{"width":800,"height":600}}"#,
//! )?;
//! assert_eq!(doc.read_string("gameTitle")?, "My New Game");
//! let size = doc.read_object("screenSize")?;
//! assert_eq!(jsonread_core::read_number_as_int(size, "width")?, 800);
//! # Ok::<(), jsonread_core::Error>(())
//! ```
pub mod access;
pub mod browse;
pub mod document;
pub mod error;
pub mod value;

pub use access::{
    read_array, read_array_of_string, read_bool, read_number, read_number_as_int, read_object,
    read_string, read_value,
};
pub use browse::{ChildInfo, get_by_pointer, list_children};
pub use document::{Document, Source, load_from_file, load_from_slice, load_from_text};
pub use error::{Error, ErrorKind, Result};
pub use value::{JsonKind, JsonValue, Map};
