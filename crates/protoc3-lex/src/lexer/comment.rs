//! Comment marker lexing.
//!
//! The lexer only emits tokens for comment markers themselves (`//`, `/*`,
//! `*/`); the text inside a comment is re-lexed as ordinary tokens. The
//! parser is what stitches the tokens between a marker and the following
//! `EndLine` (or closing marker) into a single comment body.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Tries to lex `//`, `/*`, or `*/` at the current position.
    ///
    /// Returns `None` for a bare `/` or `*` that isn't part of a marker, so
    /// the caller can fall through to ordinary control/identifier handling.
    pub(super) fn lex_comment_marker(&mut self) -> Option<Token> {
        let c = self.cursor.current_char();
        let next = self.cursor.peek_char(1);

        let is_marker = (c == '/' && matches!(next, '/' | '*')) || (c == '*' && next == '/');
        if !is_marker {
            return None;
        }

        self.cursor.advance();
        self.cursor.advance();
        Some(self.make_token(TokenKind::Comment))
    }
}
