//! Compact serialization of a value tree.

use std::fmt::{self, Write};

use crate::value::Value;

/// Writes the canonical compact rendering of `value` to `out`.
///
/// No whitespace is emitted between tokens; object members come out in
/// ascending key order. `Value`'s `Display` impl goes through this function,
/// so `value.to_string()` produces the same text.
///
/// # Examples
///
/// ```
/// use jsonio::parse;
///
/// let value = parse(r#"{ "b": [1, 2], "a": "x/y" }"#).unwrap();
/// assert_eq!(value.to_string(), r#"{"a":"x/y","b":[1,2]}"#);
/// ```
pub fn write<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    match value {
        Value::Number(n) => write!(out, "{}", n),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write(item, out)?;
            }
            out.write_char(']')
        }
        Value::Object(members) => {
            out.write_char('{')?;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_string(key, out)?;
                out.write_char(':')?;
                write(member, out)?;
            }
            out.write_char('}')
        }
    }
}

/// Quotes and escapes one string. `/` is never re-escaped, and control
/// characters outside the escape set are emitted verbatim.
fn write_string<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\t' => out.write_str("\\t")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\x08' => out.write_str("\\b")?,
            '\x0C' => out.write_str("\\f")?,
            ch => out.write_char(ch)?,
        }
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Array, Object};

    fn render(value: &Value) -> String {
        let mut out = String::new();
        write(value, &mut out).unwrap();
        out
    }

    #[test]
    fn numbers_use_the_default_float_form() {
        assert_eq!(render(&Value::Number(123.0)), "123");
        assert_eq!(render(&Value::Number(-45.0)), "-45");
        assert_eq!(render(&Value::Number(0.0)), "0");
    }

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(render(&Value::from("a\tb")), r#""a\tb""#);
        assert_eq!(render(&Value::from("a\"b\\c")), r#""a\"b\\c""#);
        assert_eq!(render(&Value::from("\n\r\x08\x0C")), r#""\n\r\b\f""#);
    }

    #[test]
    fn slash_is_not_re_escaped() {
        assert_eq!(render(&Value::from("x/y")), r#""x/y""#);
    }

    #[test]
    fn unlisted_control_characters_pass_through() {
        assert_eq!(render(&Value::from("a\x01b")), "\"a\x01b\"");
    }

    #[test]
    fn arrays_are_comma_joined_without_whitespace() {
        let arr = vec![Value::from(1i64), Value::from("x"), Value::from(3i64)];
        assert_eq!(render(&Value::from(arr)), r#"[1,"x",3]"#);
        assert_eq!(render(&Value::Array(Array::new())), "[]");
    }

    #[test]
    fn objects_emit_sorted_quoted_keys() {
        let mut obj = Object::new();
        obj.insert("zeta".to_string(), Value::from(1i64));
        obj.insert("alpha".to_string(), Value::from("v"));
        assert_eq!(render(&Value::from(obj)), r#"{"alpha":"v","zeta":1}"#);
        assert_eq!(render(&Value::Object(Object::new())), "{}");
    }

    #[test]
    fn display_matches_write() {
        let mut obj = Object::new();
        obj.insert("k".to_string(), Value::from(vec![Value::from(1i64)]));
        let value = Value::from(obj);
        assert_eq!(value.to_string(), render(&value));
    }
}
