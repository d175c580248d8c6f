use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// A scan error with location information.
///
/// The tokenizer fails fast: the first malformed construct aborts the scan,
/// and the error is returned to the caller in place of the token sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    /// Create a new scan error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The specific kind of scan error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LexErrorKind {
    /// A character with no meaning in any lexeme position.
    InvalidCharacter(char),
    /// A numeric literal with more than one decimal point.
    MalformedNumber(String),
    /// A string literal was not closed before end of input.
    UnterminatedString,
    /// An invalid escape sequence was encountered in a string.
    InvalidEscape(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid character: {c:?}"),
            Self::MalformedNumber(s) => write!(f, "malformed number literal: {s}"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::InvalidEscape(c) => write!(f, "invalid escape sequence: \\{c}"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for LexError {}
