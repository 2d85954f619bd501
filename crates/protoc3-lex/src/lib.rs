//! protoc3-lex — the proto3 lexer.
//!
//! Turns source text into a flat stream of [`Token`]s: identifiers, string
//! and numeric literals, single punctuation characters, comment markers, and
//! end-of-line markers. The lexer performs no grammar analysis and never
//! fails outright — an unrecognized character becomes an `Id` token holding
//! that character, with a warning recorded on the supplied [`Handler`].

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use std::collections::VecDeque;

use protoc3_util::Handler;

/// Lexes `source` in full, returning every token in source order.
///
/// Tokens are meant to be consumed by popping from the front, so callers
/// typically drain this into a `VecDeque` (as this function itself returns)
/// rather than indexing into it.
pub fn tokenize(source: &str, handler: &mut Handler) -> VecDeque<Token> {
    Lexer::new(source, handler).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_minimal_message() {
        let mut handler = Handler::new();
        let tokens = tokenize("message Foo {\n  string name = 1;\n}\n", &mut handler);
        assert!(!tokens.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        let mut handler = Handler::new();
        let tokens = tokenize("", &mut handler);
        assert!(tokens.is_empty());
    }
}
