//! Error taxonomy for parsing and variant access.

use std::fmt;

/// Result type for parsing and accessor operations.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Failures surfaced by [`parse`](crate::parse) and by the typed accessors
/// on [`Value`](crate::Value).
///
/// The first three variants are input-driven parse failures; `TypeMismatch`
/// only comes from `Value::as_*` accessors and signals a caller contract
/// violation rather than malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input ran out before a required closing token.
    UnexpectedEndOfInput,
    /// Dispatch found a character no grammar rule starts with.
    UnexpectedCharacter(char),
    /// An unrecognized character followed `\` inside a string.
    InvalidEscapeSequence(char),
    /// An accessor requested a variant that is not active.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            JsonError::UnexpectedCharacter(c) => write!(f, "unexpected character '{}'", c),
            JsonError::InvalidEscapeSequence(c) => {
                write!(f, "invalid escape sequence '\\{}'", c)
            }
            JsonError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for JsonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            JsonError::UnexpectedEndOfInput.to_string(),
            "unexpected end of input"
        );
        assert_eq!(
            JsonError::UnexpectedCharacter('@').to_string(),
            "unexpected character '@'"
        );
        assert_eq!(
            JsonError::InvalidEscapeSequence('x').to_string(),
            "invalid escape sequence '\\x'"
        );
        assert_eq!(
            JsonError::TypeMismatch {
                expected: "number",
                found: "string",
            }
            .to_string(),
            "type mismatch: expected number, found string"
        );
    }
}
