//! Parse errors.

use thiserror::Error;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A character that cannot start any expression.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// A `)` or `}` with no matching opener.
    #[error("unexpected '{0}'")]
    UnexpectedClose(char),
    /// Input ended inside `(` or `{`.
    #[error("expected '{close}' to close '{open}' opened at {line}:{column}")]
    UnclosedDelimiter {
        open: char,
        close: char,
        line: usize,
        column: usize,
    },
    /// Input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A failure to produce a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed source text.
    #[error("{source_name}:{line}:{column}: error: {kind}")]
    Syntax {
        source_name: String,
        line: usize,
        column: usize,
        kind: ParseErrorKind,
    },
    /// The source file could not be read.
    #[error("{path}: error: unable to open file ({message})")]
    Io { path: String, message: String },
}

impl ParseError {
    /// The syntax error kind, if this is a syntax error.
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            ParseError::Syntax { kind, .. } => Some(kind),
            ParseError::Io { .. } => None,
        }
    }
}

/// 1-based line and column (in chars) of a byte offset.
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = memchr::memchr_iter(b'\n', before.as_bytes()).count() + 1;
    let line_start = memchr::memrchr(b'\n', before.as_bytes()).map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
