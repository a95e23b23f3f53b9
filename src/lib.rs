//! Minimal JSON-subset tree library.
//!
//! Converts between a textual JSON-like representation and an in-memory
//! [`Value`] tree, and back. The grammar is a deliberate subset of JSON:
//! numbers are integers (an optional sign followed by decimal digits),
//! there are no `true`/`false`/`null` literals, and object keys are kept
//! in ascending lexicographic order.
//!
//! # Example
//!
//! ```
//! use jsonio::{parse, Value};
//!
//! let value = parse(r#"{"name": "glossary", "ids": [4, 5, 6]}"#)?;
//!
//! let obj = value.as_object()?;
//! assert_eq!(obj["name"].as_str()?, "glossary");
//! assert_eq!(obj["ids"].as_array()?[0].as_number()?, 4.0);
//!
//! // Rendering is always compact, with keys sorted.
//! assert_eq!(value.to_string(), r#"{"ids":[4,5,6],"name":"glossary"}"#);
//! # Ok::<(), jsonio::JsonError>(())
//! ```

mod error;
mod parser;
mod value;
mod writer;

pub use error::{JsonError, Result};
pub use parser::parse;
pub use value::{Array, Object, Value};
pub use writer::write;
