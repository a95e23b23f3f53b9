//! Recursive-descent parser over a forward-only character cursor.
//!
//! One value is parsed from the front of the input; trailing characters are
//! left unconsumed. The grammar is the JSON subset described in the crate
//! docs: no `true`/`false`/`null`, and numbers are an optional sign followed
//! by decimal digits only.

use crate::error::{JsonError, Result};
use crate::value::{Array, Object, Value};

/// Parses one value from the front of `input`.
///
/// Input after the first complete value is ignored, so `parse("12.5")`
/// yields the number `12` and never sees the `.5`.
///
/// # Errors
///
/// Returns [`JsonError::UnexpectedEndOfInput`], [`JsonError::UnexpectedCharacter`]
/// or [`JsonError::InvalidEscapeSequence`]. A failed parse yields no partial
/// tree.
///
/// # Examples
///
/// ```
/// use jsonio::parse;
///
/// let value = parse(r#"{"b": 2, "a": [1, "x"]}"#).unwrap();
/// let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let mut cursor = Cursor::new(input);
    parse_value(&mut cursor)
}

/// Forward-only position tracker over the input characters. Every read goes
/// through [`Cursor::peek`], so there is no way to dereference past the end.
struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Tolerant skip: advance past anything up to the next `sep` or `term`.
    /// Malformed separators are absorbed, not rejected.
    fn skip_to(&mut self, sep: char, term: char) {
        while let Some(ch) = self.peek() {
            if ch == sep || ch == term {
                break;
            }
            self.advance();
        }
    }
}

fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value> {
    cursor.skip_whitespace();
    match cursor.peek() {
        None => Err(JsonError::UnexpectedEndOfInput),
        Some('{') => Ok(Value::Object(parse_object(cursor)?)),
        Some('[') => Ok(Value::Array(parse_array(cursor)?)),
        Some('"') => Ok(Value::String(parse_string(cursor)?)),
        Some(ch) if ch == '-' || ch.is_ascii_digit() => Ok(Value::Number(parse_number(cursor))),
        Some(ch) => Err(JsonError::UnexpectedCharacter(ch)),
    }
}

fn parse_number(cursor: &mut Cursor<'_>) -> f64 {
    let start = cursor.position;
    // First character (sign or digit) is consumed unconditionally, then a
    // digit run. No fraction, no exponent.
    cursor.advance();
    while matches!(cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
        cursor.advance();
    }

    // atof semantics: a bare sign reads as zero.
    cursor.input[start..cursor.position].parse().unwrap_or(0.0)
}

fn parse_string(cursor: &mut Cursor<'_>) -> Result<String> {
    let mut result = String::new();

    cursor.advance(); // opening '"'
    loop {
        match cursor.peek() {
            None => return Err(JsonError::UnexpectedEndOfInput),
            Some('"') => {
                cursor.advance();
                return Ok(result);
            }
            Some('\\') => {
                cursor.advance();
                result.push(unescape(cursor)?);
                cursor.advance();
            }
            Some(ch) => {
                result.push(ch);
                cursor.advance();
            }
        }
    }
}

fn unescape(cursor: &mut Cursor<'_>) -> Result<char> {
    match cursor.peek() {
        None => Err(JsonError::UnexpectedEndOfInput),
        Some('"') => Ok('"'),
        Some('\\') => Ok('\\'),
        Some('/') => Ok('/'),
        Some('t') => Ok('\t'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('b') => Ok('\x08'),
        Some('f') => Ok('\x0C'),
        Some(ch) => Err(JsonError::InvalidEscapeSequence(ch)),
    }
}

fn parse_array(cursor: &mut Cursor<'_>) -> Result<Array> {
    let mut result = Array::new();

    cursor.advance(); // '['
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(JsonError::UnexpectedEndOfInput),
            Some(']') => {
                cursor.advance();
                return Ok(result);
            }
            Some(_) => {
                result.push(parse_value(cursor)?);
                cursor.skip_to(',', ']');
                if cursor.is_at_end() {
                    return Err(JsonError::UnexpectedEndOfInput);
                }
                if cursor.peek() == Some(',') {
                    cursor.advance();
                }
            }
        }
    }
}

fn parse_object(cursor: &mut Cursor<'_>) -> Result<Object> {
    let mut result = Object::new();

    cursor.advance(); // '{'
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(JsonError::UnexpectedEndOfInput),
            Some('}') => {
                cursor.advance();
                return Ok(result);
            }
            Some('"') => {
                let key = parse_string(cursor)?;
                cursor.skip_to(':', '}');
                if cursor.is_at_end() {
                    return Err(JsonError::UnexpectedEndOfInput);
                }
                cursor.advance(); // ':'

                // Last write wins on duplicate keys.
                result.insert(key, parse_value(cursor)?);

                cursor.skip_to(',', '}');
                if cursor.is_at_end() {
                    return Err(JsonError::UnexpectedEndOfInput);
                }
                if cursor.peek() == Some(',') {
                    cursor.advance();
                }
            }
            Some(ch) => return Err(JsonError::UnexpectedCharacter(ch)),
        }
    }
}
