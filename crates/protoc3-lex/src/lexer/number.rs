//! Numeric literal lexing: decimal, octal, hex, and floating-point.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at an ASCII digit.
    ///
    /// `0x`/`0X` switches to hex digits; a leading `0` followed by more
    /// digits is read as octal; anything else is decimal, with an optional
    /// `.` fraction and `e`/`E` exponent promoting it to a float lexeme.
    /// The token kind is `Numeric` regardless of base or fractional part —
    /// the parser decides integer vs. float from the lexeme text.
    pub(super) fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
        {
            self.cursor.advance();
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_hexdigit() {
                self.cursor.advance();
            }
            return self.make_token(TokenKind::Numeric);
        }

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let sign_offset = if matches!(self.cursor.peek_char(1), '+' | '-') { 2 } else { 1 };
            if self.cursor.peek_char(sign_offset).is_ascii_digit() {
                for _ in 0..sign_offset {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        self.make_token(TokenKind::Numeric)
    }
}
