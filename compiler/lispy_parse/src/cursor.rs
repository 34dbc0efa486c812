//! Byte cursor over source text.
//!
//! Every token boundary in the grammar is an ASCII byte, so the cursor only
//! ever stops on char boundaries and slices it hands out are valid `str`s.

/// Cursor over the bytes of a source string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at the cursor, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Byte `n` positions past the cursor.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + n).copied()
    }

    /// Full char at the cursor, for diagnostics on non-ASCII input.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current byte.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Skip whitespace (space, tab, carriage return, newline).
    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Move to the next `\r` or `\n`, or to end of input.
    pub(crate) fn skip_to_line_end(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Move to the closing `"` of a string body, honoring backslash escapes.
    ///
    /// Returns `false` (cursor at end of input) if there is no closing quote.
    pub(crate) fn skip_string_body(&mut self) -> bool {
        let bytes = self.src.as_bytes();
        loop {
            match memchr::memchr2(b'"', b'\\', &bytes[self.pos..]) {
                Some(offset) => {
                    self.pos += offset;
                    if bytes[self.pos] == b'"' {
                        return true;
                    }
                    // Backslash: skip it and whatever it escapes.
                    self.pos = (self.pos + 2).min(bytes.len());
                    self.skip_continuation_bytes();
                }
                None => {
                    self.pos = bytes.len();
                    return false;
                }
            }
        }
    }

    /// An escaped char may be multi-byte; keep `pos` on a char boundary.
    fn skip_continuation_bytes(&mut self) {
        while !self.src.is_char_boundary(self.pos) {
            self.pos += 1;
        }
    }

    /// Source text between two offsets.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }
}
