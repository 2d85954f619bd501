//! Identifier lexing.
//!
//! Unlike a general-purpose language lexer, proto3 keywords (`message`,
//! `enum`, `repeated`, ...) are not distinguished here — they come back as
//! ordinary `Id` tokens and it's the parser's job to recognize them by value
//! where the grammar expects them.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of letters, digits, and underscores starting at a letter
    /// or underscore.
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Id)
    }
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
