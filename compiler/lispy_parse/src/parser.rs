//! Recursive-descent parser producing a [`Program`].

use std::path::Path;

use lispy_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::parse_error::{line_column, ParseError, ParseErrorKind};
use crate::syntax::{Program, SyntaxNode};

/// Parse source text into a program.
///
/// `source_name` only appears in diagnostics.
pub fn parse(source_name: &str, text: &str) -> Result<Program, ParseError> {
    let mut parser = Parser {
        cursor: Cursor::new(text),
        source: text,
        source_name,
    };
    let children = parser.parse_program()?;
    Ok(Program {
        source_name: source_name.to_string(),
        children,
    })
}

/// Read a file and parse its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program, ParseError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|err| ParseError::Io {
        path: display.clone(),
        message: err.to_string(),
    })?;
    parse(&display, &text)
}

#[inline]
fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'+' | b'-' | b'*' | b'/' | b'\\' | b'=' | b'<' | b'>' | b'!' | b'&' | b'%'
        )
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    source_name: &'a str,
}

impl Parser<'_> {
    fn parse_program(&mut self) -> Result<Vec<SyntaxNode>, ParseError> {
        let mut children = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                return Ok(children);
            }
            children.push(self.parse_expr()?);
        }
    }

    /// Parse one expression. The cursor must be on a non-whitespace byte.
    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            Some(b'(') => self.parse_seq(b'(', b')').map(SyntaxNode::SExpr),
            Some(b'{') => self.parse_seq(b'{', b'}').map(SyntaxNode::QExpr),
            Some(close @ (b')' | b'}')) => {
                Err(self.error_at(start, ParseErrorKind::UnexpectedClose(char::from(close))))
            }
            Some(b'"') => self.parse_string(),
            Some(b';') => {
                self.cursor.advance();
                let body_start = self.cursor.pos();
                self.cursor.skip_to_line_end();
                Ok(SyntaxNode::Comment(
                    self.cursor.slice(body_start, self.cursor.pos()).to_string(),
                ))
            }
            Some(b'-') if self.cursor.peek(1).is_some_and(|b| b.is_ascii_digit()) => {
                self.cursor.advance();
                Ok(self.parse_digits(start))
            }
            Some(b) if b.is_ascii_digit() => Ok(self.parse_digits(start)),
            Some(b) if is_symbol_byte(b) => {
                self.cursor.eat_while(is_symbol_byte);
                Ok(SyntaxNode::Symbol(
                    self.cursor.slice(start, self.cursor.pos()).to_string(),
                ))
            }
            _ => {
                let c = self.cursor.current_char().unwrap_or('\0');
                Err(self.error_at(start, ParseErrorKind::UnexpectedChar(c)))
            }
        }
    }

    fn parse_digits(&mut self, start: usize) -> SyntaxNode {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        SyntaxNode::Number(self.cursor.slice(start, self.cursor.pos()).to_string())
    }

    fn parse_string(&mut self) -> Result<SyntaxNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance();
        let body_start = self.cursor.pos();
        if !self.cursor.skip_string_body() {
            return Err(self.error_at(start, ParseErrorKind::UnterminatedString));
        }
        let body = self.cursor.slice(body_start, self.cursor.pos()).to_string();
        self.cursor.advance();
        Ok(SyntaxNode::Str(body))
    }

    fn parse_seq(&mut self, open: u8, close: u8) -> Result<Vec<SyntaxNode>, ParseError> {
        let open_pos = self.cursor.pos();
        self.cursor.advance();
        ensure_sufficient_stack(|| {
            let mut items = Vec::new();
            loop {
                self.cursor.skip_whitespace();
                match self.cursor.current() {
                    None => {
                        let (line, column) = line_column(self.source, open_pos);
                        return Err(self.error_at(
                            self.cursor.pos(),
                            ParseErrorKind::UnclosedDelimiter {
                                open: char::from(open),
                                close: char::from(close),
                                line,
                                column,
                            },
                        ));
                    }
                    Some(b) if b == close => {
                        self.cursor.advance();
                        return Ok(items);
                    }
                    Some(_) => items.push(self.parse_expr()?),
                }
            }
        })
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind) -> ParseError {
        let (line, column) = line_column(self.source, offset);
        ParseError::Syntax {
            source_name: self.source_name.to_string(),
            line,
            column,
            kind,
        }
    }
}
