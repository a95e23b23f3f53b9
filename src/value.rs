//! The tree value model: a closed set of JSON variants.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{JsonError, Result};

/// An ordered sequence of values. Insertion order is preserved exactly.
pub type Array = Vec<Value>;

/// A mapping from string keys to values. Keys are unique and kept in
/// ascending lexicographic order, which is observable in serialized output.
pub type Object = BTreeMap<String, Value>;

/// One JSON-like entity. Exactly one variant is active at a time.
///
/// Children are owned exclusively by their containing `Value`; the tree is
/// strictly hierarchical and dropped recursively with the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    pub fn kind_desc(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the number if this is a `Number`, otherwise a
    /// [`JsonError::TypeMismatch`]. Accessing the wrong variant never
    /// silently yields a value.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch("object")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            found: self.kind_desc(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_active_variant() {
        let v = Value::from(42i64);
        assert!(v.is_number());
        assert_eq!(v.as_number().unwrap(), 42.0);

        let v = Value::from("hello");
        assert!(v.is_string());
        assert_eq!(v.as_str().unwrap(), "hello");
    }

    #[test]
    fn wrong_variant_access_is_a_type_mismatch() {
        let v = Value::from("hello");
        assert_eq!(
            v.as_number(),
            Err(JsonError::TypeMismatch {
                expected: "number",
                found: "string",
            })
        );
        assert_eq!(
            Value::Array(Array::new()).as_object().unwrap_err(),
            JsonError::TypeMismatch {
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn assignment_replaces_the_active_variant() {
        let mut v = Value::from(1i64);
        v = Value::from(vec![Value::from(2i64)]);
        assert!(v.is_array());
        assert_eq!(v.as_array().unwrap().len(), 1);
    }

    #[test]
    fn object_keys_enumerate_in_sorted_order() {
        let mut obj = Object::new();
        obj.insert("zeta".to_string(), Value::from(1i64));
        obj.insert("alpha".to_string(), Value::from(2i64));
        obj.insert("mid".to_string(), Value::from(3i64));

        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn reinserting_a_key_overwrites_in_place() {
        let mut obj = Object::new();
        obj.insert("k".to_string(), Value::from(1i64));
        obj.insert("k".to_string(), Value::from(2i64));

        assert_eq!(obj.len(), 1);
        assert_eq!(obj["k"].as_number().unwrap(), 2.0);
    }

    #[test]
    fn arrays_keep_insertion_order_and_mixed_variants() {
        let arr = vec![Value::from("a"), Value::from(1i64), Value::from("a")];
        let v = Value::from(arr);
        let items = v.as_array().unwrap();
        assert_eq!(items[0].as_str().unwrap(), "a");
        assert_eq!(items[1].as_number().unwrap(), 1.0);
        assert_eq!(items[2].as_str().unwrap(), "a");
    }
}
