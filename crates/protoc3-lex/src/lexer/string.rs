//! String literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted string literal, either `"..."` or `` `...` ``.
    ///
    /// Recognizes `\xHH` hex escapes, `\NNN` octal escapes, and the named
    /// escapes (`\n`, `\t`, `\r`, `\\`, `\'`, `\"`, `` \` ``); anything else
    /// after a backslash is consumed as a literal two-character escape. An
    /// unterminated literal runs to end of input rather than failing — the
    /// lexeme simply won't have a matching closing quote.
    pub(super) fn lex_string(&mut self) -> Token {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != quote {
            if self.cursor.current_char() == '\\' {
                self.cursor.advance();
                self.lex_escape();
            } else if self.cursor.current_char() == '\n' {
                break;
            } else {
                self.cursor.advance();
            }
        }

        if self.cursor.current_char() == quote {
            self.cursor.advance();
        }

        self.make_token(TokenKind::String)
    }

    fn lex_escape(&mut self) {
        match self.cursor.current_char() {
            'x' | 'X' => {
                self.cursor.advance();
                for _ in 0..2 {
                    if self.cursor.current_char().is_ascii_hexdigit() {
                        self.cursor.advance();
                    }
                }
            }
            '0'..='7' => {
                for _ in 0..3 {
                    if self.cursor.current_char().is_digit(8) {
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
            }
            _ if !self.cursor.is_at_end() => self.cursor.advance(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoc3_util::Handler;

    fn lex(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        lexer.next_token().unwrap()
    }

    #[test]
    fn lexes_double_quoted_string() {
        let tok = lex("\"hello\"");
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.lexeme, "\"hello\"");
    }

    #[test]
    fn lexes_backtick_string() {
        let tok = lex("`hello`");
        assert_eq!(tok.lexeme, "`hello`");
    }

    #[test]
    fn handles_named_escape() {
        let tok = lex("\"a\\nb\"");
        assert_eq!(tok.lexeme, "\"a\\nb\"");
    }

    #[test]
    fn handles_hex_escape() {
        let tok = lex("\"\\x41\"");
        assert_eq!(tok.lexeme, "\"\\x41\"");
    }

    #[test]
    fn handles_octal_escape() {
        let tok = lex("\"\\101\"");
        assert_eq!(tok.lexeme, "\"\\101\"");
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        let tok = lex("\"oops");
        assert_eq!(tok.lexeme, "\"oops");
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let tok = lex("\"oops\nnext");
        assert_eq!(tok.lexeme, "\"oops");
    }
}
