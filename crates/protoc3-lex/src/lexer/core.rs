//! Core lexer implementation: the `Lexer` struct and its dispatch loop.

use protoc3_util::{Diagnostic, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Turns proto3 source text into a stream of [`Token`]s.
///
/// The lexer never fails: a character it doesn't recognize is still emitted,
/// as an `Id`-kind token carrying that one character, with a warning logged
/// to the [`Handler`]. There is no end-of-file token; callers detect the end
/// of input by the cursor running dry.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    handler: &'a mut Handler,
    pub(super) token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.skip_inline_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return None;
        }

        let c = self.cursor.current_char();

        if c == '\n' {
            self.cursor.advance();
            return Some(self.make_token(TokenKind::EndLine));
        }

        if c.is_ascii_digit() {
            return Some(self.lex_number());
        }

        if is_ident_start(c) {
            return Some(self.lex_identifier());
        }

        if c == '"' || c == '`' {
            return Some(self.lex_string());
        }

        if c == '/' || (c == '*' && self.cursor.peek_char(1) == '/') {
            if let Some(tok) = self.lex_comment_marker() {
                return Some(tok);
            }
        }

        if is_control_char(c) {
            self.cursor.advance();
            return Some(self.make_token(TokenKind::Control));
        }

        self.report_warning(format!("unrecognized character '{}'", c));
        self.cursor.advance();
        Some(self.make_token(TokenKind::Id))
    }

    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, lexeme, self.token_start_line, self.token_start_column)
    }

    fn report_warning(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        self.handler.emit(Diagnostic::warning(message, span));
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_control_char(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | '<' | '>' | '[' | ']' | ';' | ',' | '=' | '.')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
