//! Character cursor for traversing proto3 source text.
//!
//! Maintains byte position plus 1-based line/column while iterating through
//! source characters, correctly stepping over multi-byte UTF-8 sequences.

/// A cursor over source text.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character at the current position, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Character `offset` bytes ahead of the current position.
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Character `offset` characters ahead (0 = current); slower than
    /// [`Self::char_at`] for non-ASCII lookahead but offset-exact.
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    /// Advances one character, updating line/column tracking.
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Slice of source from `start` (a byte offset returned earlier by
    /// [`Self::position`]) up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Skips spaces, tabs, and carriage returns, but stops before `'\n'` —
    /// the parser needs newlines as `EndLine` tokens, so the lexer never
    /// swallows one as ordinary whitespace.
    pub fn skip_inline_whitespace(&mut self) {
        while matches!(self.current_char(), ' ' | '\t' | '\r') {
            self.advance();
        }
    }
}
